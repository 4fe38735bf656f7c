//! Rendering numeric values back into idiomatic quantity text

/// Fractions considered idiomatic for display, scanned in order. The first
/// entry within tolerance of the value wins.
const NICE_FRACTIONS: [(&str, f64); 9] = [
    ("1/2", 1.0 / 2.0),
    ("1/3", 1.0 / 3.0),
    ("2/3", 2.0 / 3.0),
    ("1/4", 1.0 / 4.0),
    ("3/4", 3.0 / 4.0),
    ("1/5", 1.0 / 5.0),
    ("2/5", 2.0 / 5.0),
    ("1/8", 1.0 / 8.0),
    ("1/10", 1.0 / 10.0),
];

/// Comparing against the table must absorb the floating-point error
/// accumulated by normalization, so a third of a recipe still displays as
/// "1/3" rather than "0.3".
const TOLERANCE: f64 = 1e-14;

/// Get a nice string representation of the given value. When as_fraction
/// is set and the value sits on a common fraction, the fraction is used;
/// otherwise the value is rendered to one decimal place, with a whole
/// number's ".0" dropped.
pub fn format(value: f64, as_fraction: bool) -> String {
    if as_fraction {
        if let Some(fraction) = nice_fraction(value) {
            return fraction.to_string();
        }
    }

    let text = format!("{:.1}", value);
    match text.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => text,
    }
}

fn nice_fraction(value: f64) -> Option<&'static str> {
    NICE_FRACTIONS
        .iter()
        .find(|(_, v)| (value - v).abs() < TOLERANCE)
        .map(|(text, _)| *text)
}
