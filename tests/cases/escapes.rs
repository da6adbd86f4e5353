let quote = "say \"hi\" // not a comment";
let path = "C:\\dir\\"; // trailing backslash
let html = "<b>&amp;</b>";
if a < b && b > c { return; }
