//! Textual canonicalization, the fallback comparison mode.

/// Lowercases `s`, replaces every character outside `{a-z, 0-9, whitespace, '-',
/// '+', '.'}` with a single space, collapses whitespace runs, and trims.
pub fn canonicalize_text(s: &str) -> String {
    let lowered = s.to_lowercase();
    let mut cleaned = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        if ch.is_ascii_lowercase()
            || ch.is_ascii_digit()
            || ch.is_whitespace()
            || matches!(ch, '-' | '+' | '.')
        {
            cleaned.push(ch);
        } else {
            cleaned.push(' ');
        }
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
