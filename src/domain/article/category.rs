// src/domain/article/category.rs

/// The fixed, ordered category set shared by the catalog filter and the
/// authoring form. Articles may still carry a category outside this list.
pub const CATEGORIES: [&str; 10] = [
    "Marketing",
    "Bisnis",
    "Teknologi",
    "Pendidikan",
    "Desain",
    "Olahraga",
    "Politik",
    "Hiburan",
    "Opini",
    "Sosial",
];

/// Trim the input and map it onto the canonical spelling of a known category
/// when one matches case-insensitively. Unknown names pass through trimmed.
pub fn normalize_category(input: &str) -> String {
    let trimmed = input.trim();
    CATEGORIES
        .iter()
        .find(|known| known.eq_ignore_ascii_case(trimmed))
        .map_or_else(|| trimmed.to_string(), |known| (*known).to_string())
}

pub fn is_known_category(name: &str) -> bool {
    CATEGORIES.contains(&name)
}
