/// Lowercases and trims a free-text search term for substring matching.
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Integer percentage share of `part` in `whole`, rounded to nearest.
///
/// Returns 0 when `whole` is not positive, so an empty dataset never divides
/// by zero. Shares are rounded independently; a set of shares is not
/// rebalanced to sum to exactly 100.
pub fn percentage_share(part: f64, whole: f64) -> u32 {
    if whole <= 0.0 {
        return 0;
    }
    (part / whole * 100.0).round() as u32
}
