//! Final text assembly.

/// Join `words`, trim the result and optionally uppercase its first character.
pub(crate) fn finish(words: &[&str], upper_first: bool) -> String {
    let joined = words.iter().map(|w| w.trim()).filter(|w| !w.is_empty()).collect::<Vec<_>>().join(" ");
    let text = joined.trim();

    if upper_first { capitalize_first(text) } else { text.to_string() }
}

/// Uppercase the first Unicode scalar, leaving the rest untouched.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
