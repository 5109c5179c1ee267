use crate::models::domain::{Question, QuizPreview};

/// Something a listing can search by title and category.
pub trait Searchable {
    fn id(&self) -> i64;
    fn title(&self) -> &str;
    fn category(&self) -> &str;

    /// Case-insensitive substring match on title or category.
    fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title().to_lowercase().contains(&term)
            || self.category().to_lowercase().contains(&term)
    }
}

impl Searchable for Question {
    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.question_title
    }

    fn category(&self) -> &str {
        &self.category
    }
}

impl Searchable for QuizPreview {
    fn id(&self) -> i64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn category(&self) -> &str {
        &self.category
    }
}

/// A fully fetched collection with a local search filter.
///
/// Removal only affects the in-memory list; there is no delete endpoint, so
/// the next `reload` brings removed items back.
#[derive(Debug, Clone)]
pub struct Listing<T> {
    items: Vec<T>,
    search_term: String,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search_term: String::new(),
        }
    }
}

impl<T: Searchable> Listing<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            search_term: String::new(),
        }
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Items matching the current search term, in fetch order.
    pub fn filtered(&self) -> Vec<&T> {
        self.items
            .iter()
            .filter(|item| item.matches(&self.search_term))
            .collect()
    }

    /// Drops an item locally. Returns false if no item has that id.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    /// Replaces the items with a fresh fetch, keeping the search term.
    pub fn reload(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
