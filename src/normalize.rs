/// Reduce a raw token to lowercase ASCII letters and digits.
///
/// Everything else (punctuation, symbols, non-ASCII) is dropped, so a
/// punctuation-only token becomes the empty string.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
