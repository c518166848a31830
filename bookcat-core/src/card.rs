//! Text rendering of a single book card

use crate::types::{Book, NO_PRICE};
use std::fmt;

const NO_COVER: &str = "(no cover)";

/// Presentational card for one book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCard<'a> {
    /// Position of the book in the full catalog
    pub index: usize,
    pub title: &'a str,
    pub author: &'a str,
    pub price: &'a str,
    pub image: &'a str,
    pub link: &'a str,
    pub selected: bool,
}

impl<'a> BookCard<'a> {
    pub fn new(index: usize, book: &'a Book, selected: bool) -> Self {
        Self {
            index,
            title: &book.title,
            author: &book.author,
            price: &book.price,
            image: &book.url,
            link: &book.link,
            selected,
        }
    }

    /// Clicking a card toggles the selection of its book
    pub fn on_click(&self) -> crate::controller::Action {
        crate::controller::Action::Select(self.index)
    }
}

impl fmt::Display for BookCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.selected { "[x]" } else { "[ ]" };
        let price = if self.price.is_empty() { NO_PRICE } else { self.price };
        let image = if self.image.is_empty() { NO_COVER } else { self.image };

        write!(f, "{} #{} {}", marker, self.index, self.title)?;
        if !self.author.is_empty() {
            write!(f, " by {}", self.author)?;
        }
        write!(f, " | {} | cover: {}", price, image)?;
        if !self.link.is_empty() {
            write!(f, " | {}", self.link)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Action;

    #[test]
    fn test_card_render_selected() {
        let book = Book {
            price: "$4.99".to_string(),
            ..Book::new("Emma", "Jane Austen", "https://img/emma.jpg")
        };
        let card = BookCard::new(3, &book, true);
        insta::assert_snapshot!(
            card.to_string(),
            @"[x] #3 Emma by Jane Austen | $4.99 | cover: https://img/emma.jpg | https://img/emma.jpg"
        );
    }

    #[test]
    fn test_card_render_placeholders() {
        let book = Book {
            title: "Untitled".to_string(),
            ..Book::default()
        };
        let card = BookCard::new(0, &book, false);
        insta::assert_snapshot!(card.to_string(), @"[ ] #0 Untitled | N/A | cover: (no cover)");
    }

    #[test]
    fn test_card_click_selects_source_index() {
        let book = Book::default();
        assert_eq!(BookCard::new(7, &book, false).on_click(), Action::Select(7));
    }
}
