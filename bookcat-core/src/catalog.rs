//! The ordered book collection with single selection

use crate::error::{CatalogError, Result};
use crate::price::PriceFilter;
use crate::types::{Book, StoredBook};

/// Ordered sequence of books; at most one is selected.
///
/// Selection is held as an index rather than a flag on every record. The flag
/// is materialized only in the persisted shape. Stored content carrying
/// several flags is kept as loaded in `also_flagged` until the next `select`
/// normalizes it, and `delete_selected` removes every flagged record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<Book>,
    selected: Option<usize>,
    also_flagged: Vec<usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from persisted records, keeping every selection flag.
    ///
    /// The first flagged record becomes the selection.
    pub fn from_records(records: Vec<StoredBook>) -> Self {
        let mut flagged = records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.selected)
            .map(|(i, _)| i);
        let selected = flagged.next();
        let also_flagged = flagged.collect();
        let books = records.into_iter().map(|r| r.book).collect();
        Self {
            books,
            selected,
            also_flagged,
        }
    }

    /// Persisted shape, with the selection flag on each record
    pub fn to_records(&self) -> Vec<StoredBook> {
        self.books
            .iter()
            .enumerate()
            .map(|(i, book)| StoredBook {
                book: book.clone(),
                selected: self.is_selected(i),
            })
            .collect()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Index of the selected book, if any
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Book> {
        self.selected.and_then(|i| self.books.get(i))
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index) || self.also_flagged.contains(&index)
    }

    /// Gates the Update and Delete controls
    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Toggle selection of the book at `index`.
    ///
    /// Selecting a book deselects every other one; selecting the already
    /// selected book leaves nothing selected.
    pub fn select(&mut self, index: usize) -> Result<()> {
        if index >= self.books.len() {
            return Err(CatalogError::NoSuchBook(index));
        }

        self.selected = if self.selected == Some(index) {
            None
        } else {
            Some(index)
        };
        self.also_flagged.clear();
        Ok(())
    }

    /// Remove every selected book, returning them in list order.
    ///
    /// Empty without a selection.
    pub fn delete_selected(&mut self) -> Vec<Book> {
        if self.selected.is_none() {
            return Vec::new();
        }

        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.books)
            .into_iter()
            .enumerate()
            .partition(|(i, _)| self.is_selected(*i));
        self.books = kept.into_iter().map(|(_, book)| book).collect();
        self.selected = None;
        self.also_flagged.clear();
        removed.into_iter().map(|(_, book)| book).collect()
    }

    /// Append a book at the end
    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Replace the book at `index` in place, keeping list order.
    ///
    /// The replacement is never selected.
    pub fn replace(&mut self, index: usize, book: Book) -> Result<()> {
        let slot = self
            .books
            .get_mut(index)
            .ok_or(CatalogError::NoSuchBook(index))?;
        *slot = book;
        if self.selected == Some(index) {
            self.selected = self.also_flagged.first().copied();
            self.also_flagged.retain(|&i| Some(i) != self.selected);
        }
        self.also_flagged.retain(|&i| i != index);
        Ok(())
    }

    /// Books matching the filter, paired with their index in the full list
    pub fn filtered(&self, filter: PriceFilter) -> impl Iterator<Item = (usize, &Book)> {
        self.books
            .iter()
            .enumerate()
            .filter(move |(_, book)| filter.matches(&book.price))
    }
}

impl From<Vec<Book>> for Catalog {
    fn from(books: Vec<Book>) -> Self {
        Self {
            books,
            selected: None,
            also_flagged: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(title: &str, price: &str) -> Book {
        Book {
            title: title.to_string(),
            price: price.to_string(),
            ..Book::default()
        }
    }

    fn sample() -> Catalog {
        Catalog::from(vec![
            priced("A", "$5"),
            priced("B", "$15"),
            priced("C", "$25"),
        ])
    }

    fn flagged(flags: &[bool]) -> Catalog {
        let records = sample()
            .to_records()
            .into_iter()
            .zip(flags)
            .map(|(record, &selected)| StoredBook { selected, ..record })
            .collect();
        Catalog::from_records(records)
    }

    #[test]
    fn test_select_toggles() {
        let mut catalog = sample();
        catalog.select(1).unwrap();
        assert_eq!(catalog.selected_index(), Some(1));

        catalog.select(2).unwrap();
        assert_eq!(catalog.selected_index(), Some(2));

        catalog.select(2).unwrap();
        assert!(!catalog.has_selection());
    }

    #[test]
    fn test_select_out_of_range() {
        let mut catalog = sample();
        catalog.select(0).unwrap();
        assert!(matches!(catalog.select(3), Err(CatalogError::NoSuchBook(3))));
        assert_eq!(catalog.selected_index(), Some(0));
    }

    #[test]
    fn test_delete_selected() {
        let mut catalog = sample();
        assert!(catalog.delete_selected().is_empty());
        assert_eq!(catalog.len(), 3);

        catalog.select(1).unwrap();
        let removed = catalog.delete_selected();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].title, "B");
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.has_selection());
        assert_eq!(catalog.get(1).unwrap().title, "C");
    }

    #[test]
    fn test_replace_clears_selection() {
        let mut catalog = sample();
        catalog.select(0).unwrap();
        catalog.replace(0, Book::new("Z", "z", "")).unwrap();
        assert_eq!(catalog.get(0).unwrap().title, "Z");
        assert!(!catalog.has_selection());
        assert!(catalog.replace(9, Book::default()).is_err());
    }

    #[test]
    fn test_records_roundtrip_keeps_every_flag() {
        let catalog = flagged(&[false, true, true]);
        assert_eq!(catalog.selected_index(), Some(1));

        let flags: Vec<bool> = catalog.to_records().iter().map(|r| r.selected).collect();
        assert_eq!(flags, vec![false, true, true]);
    }

    #[test]
    fn test_select_normalizes_loaded_flags() {
        let mut catalog = flagged(&[true, true, false]);
        catalog.select(2).unwrap();

        let flags: Vec<bool> = catalog.to_records().iter().map(|r| r.selected).collect();
        assert_eq!(flags, vec![false, false, true]);
    }

    #[test]
    fn test_delete_removes_every_loaded_flag() {
        let mut catalog = flagged(&[true, true, false]);
        let removed: Vec<String> = catalog
            .delete_selected()
            .into_iter()
            .map(|b| b.title)
            .collect();

        assert_eq!(removed, vec!["A", "B"]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().title, "C");
        assert!(!catalog.has_selection());
    }

    #[test]
    fn test_replace_keeps_other_loaded_flag() {
        let mut catalog = flagged(&[true, false, true]);
        catalog.replace(0, priced("Z", "N/A")).unwrap();

        assert_eq!(catalog.selected_index(), Some(2));
        let flags: Vec<bool> = catalog.to_records().iter().map(|r| r.selected).collect();
        assert_eq!(flags, vec![false, false, true]);
    }

    #[test]
    fn test_filtered_keeps_source_indices() {
        let catalog = sample();
        let indices: Vec<usize> = catalog
            .filtered(PriceFilter::Over20)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(indices, vec![2]);
        assert_eq!(catalog.filtered(PriceFilter::All).count(), 3);
    }
}
