/// Group digits in threes with commas, e.g. `13650` -> `13,650`.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Distance rounded to whole km for display.
pub fn km(distance_km: f64) -> String {
    format!("{} km", thousands(distance_km.round().max(0.0) as u64))
}

pub fn price(amount: u64) -> String {
    format!("${}", thousands(amount))
}
