// Grüße 👋 from a comment
let café = naïve("λ → ∞");
let größe: f64 = 1.0;
