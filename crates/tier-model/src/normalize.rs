/// Lower-cases `raw` and drops every character outside `[a-z0-9]`.
///
/// Brand keys, titles and series aliases all pass through this before any
/// comparison, so `"be quiet!"`, `"Be-Quiet"` and `"BEQUIET"` compare equal.
pub fn normalize_key(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
