//! Label helpers shared by field types and the admin surface.

/// Uppercase the first letter of every whitespace-separated word.
///
/// The rest of each word is left as-is, so `"URL slug"` stays `"URL Slug"`.
pub fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start && !c.is_whitespace() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out
}

/// Turn an identifier into a display label: each of `separators` becomes a
/// space, then every word is capitalized.
pub fn humanize(identifier: &str, separators: &[char]) -> String {
    let spaced: String = identifier
        .chars()
        .map(|c| if separators.contains(&c) { ' ' } else { c })
        .collect();
    capitalize_words(&spaced)
}
