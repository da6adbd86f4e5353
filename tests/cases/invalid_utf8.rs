fn main() { let s = "�"; }
