//! Ordered in-memory book container.
//!
//! The catalog is an indexed arena: it exclusively owns its records in a
//! growable vector, insertion order is preserved and observable, and lookups
//! hand out stable [`BookKey`]s rather than references. Records are never
//! removed, so a key issued by [`Catalog::append`] stays valid for the life
//! of the catalog. All mutation funnels through [`Catalog::set_availability`],
//! so every outstanding key observes the latest state.

use crate::models::Book;

/// Stable handle to a record inside one [`Catalog`].
///
/// Keys are only meaningful for the catalog that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookKey(usize);

/// Ordered container of [`Book`] records.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record at the end. Duplicate titles are allowed.
    pub fn append(&mut self, book: Book) -> BookKey {
        self.books.push(book);
        BookKey(self.books.len() - 1)
    }

    /// Case-insensitive exact title lookup, first match in insertion order.
    pub fn find_by_title(&self, title: &str) -> Option<BookKey> {
        self.books
            .iter()
            .position(|book| book.matches_title(title))
            .map(BookKey)
    }

    /// Case-insensitive substring search against title or author,
    /// insertion order preserved. Read-only; returns zero or more keys.
    pub fn search(&self, query: &str) -> Vec<BookKey> {
        let query = query.to_lowercase();
        self.books
            .iter()
            .enumerate()
            .filter(|(_, book)| book.matches_query(&query))
            .map(|(index, _)| BookKey(index))
            .collect()
    }

    pub fn get(&self, key: BookKey) -> &Book {
        &self.books[key.0]
    }

    /// The single mutation entry point: flip a record's availability in
    /// place and return the live record.
    pub fn set_availability(&mut self, key: BookKey, available: bool) -> &Book {
        self.books[key.0].is_available = available;
        &self.books[key.0]
    }

    /// Full enumeration in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.append(Book::new("To Kill a Mockingbird", "Harper Lee"));
        catalog.append(Book::new("1984", "George Orwell"));
        catalog.append(Book::new("The Great Gatsby", "F. Scott Fitzgerald"));
        catalog.append(Book::new("Moby Dick", "Herman Melville"));
        catalog
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let catalog = sample_catalog();
        let titles: Vec<&str> = catalog.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "To Kill a Mockingbird",
                "1984",
                "The Great Gatsby",
                "Moby Dick"
            ]
        );
    }

    #[test]
    fn test_find_by_title_is_case_insensitive() {
        let catalog = sample_catalog();
        let key = catalog.find_by_title("MOBY DICK").expect("should find");
        assert_eq!(catalog.get(key).author, "Herman Melville");
        assert!(catalog.find_by_title("moby").is_none());
    }

    #[test]
    fn test_find_by_title_returns_first_of_duplicates() {
        let mut catalog = sample_catalog();
        catalog.append(Book::new("1984", "Someone Else"));
        let key = catalog.find_by_title("1984").expect("should find");
        assert_eq!(catalog.get(key).author, "George Orwell");
    }

    #[test]
    fn test_search_matches_title_or_author() {
        let catalog = sample_catalog();
        let hits = catalog.search("gatsby");
        assert_eq!(hits.len(), 1);
        assert_eq!(catalog.get(hits[0]).title, "The Great Gatsby");

        let hits = catalog.search("orwell");
        assert_eq!(hits.len(), 1);
        assert_eq!(catalog.get(hits[0]).title, "1984");
    }

    #[test]
    fn test_search_preserves_insertion_order() {
        let catalog = sample_catalog();
        // "er" hits Harper Lee, F. Scott Fitzgerald and Herman Melville via author
        let titles: Vec<&str> = catalog
            .search("er")
            .into_iter()
            .map(|key| catalog.get(key).title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec!["To Kill a Mockingbird", "The Great Gatsby", "Moby Dick"]
        );
    }

    #[test]
    fn test_search_can_be_empty() {
        let catalog = sample_catalog();
        assert!(catalog.search("zzzz").is_empty());
    }

    #[test]
    fn test_set_availability_is_visible_through_old_keys() {
        let mut catalog = Catalog::new();
        let key = catalog.append(Book::new("1984", "George Orwell"));
        let same = catalog.find_by_title("1984").unwrap();
        catalog.set_availability(key, false);
        assert!(!catalog.get(same).is_available);
    }
}
