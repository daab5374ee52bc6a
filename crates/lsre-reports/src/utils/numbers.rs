const UNITS: [(usize, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

/// Abbreviates a count to one decimal, e.g. `4536` becomes `4.5K`.
pub fn abbreviate_count(n: usize) -> String {
    UNITS
        .iter()
        .find(|(scale, _)| n >= *scale)
        .map(|(scale, unit)| format!("{:.1}{}", n as f64 / *scale as f64, unit))
        .unwrap_or_else(|| n.to_string())
}
