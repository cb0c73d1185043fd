// src/domain/article/slug.rs

/// Derive a URL-safe slug from a human title.
///
/// The title is lower-cased, every character outside `a-z`, `0-9`,
/// whitespace and `-` is dropped, and the remaining runs of whitespace or
/// hyphens become a single `-`. Separators never lead or trail, so the
/// output matches `[a-z0-9]+(-[a-z0-9]+)*` or is empty.
pub fn derive_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for ch in title.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            pending_separator = true;
        }
    }

    slug
}
