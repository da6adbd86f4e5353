let a = 42;
let b = 3.14;
let c = 42u32;
let d = 0..10;
let e = x1 + 1.5e3;
let f = tuple.0;
