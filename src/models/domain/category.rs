/// Categories offered by the authoring forms.
pub const CATEGORIES: [&str; 5] = [
    "Programming",
    "Framework",
    "Architecture",
    "Database",
    "General",
];

pub fn is_known_category(category: &str) -> bool {
    CATEGORIES.contains(&category)
}
