//! Bundled seed entries and their mapping into catalog records

use super::{lenient, Book, NO_PRICE};
use serde::{Deserialize, Serialize};

/// One entry of the bundled seed list
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SeedEntry {
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub price: Option<String>,

    /// Cover image address
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub image: Option<String>,

    /// External product link
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub url: Option<String>,
}

impl SeedEntry {
    /// Map the entry into the catalog record shape.
    ///
    /// Metadata fields stay blank; an absent or empty price becomes `N/A`.
    pub fn into_book(self) -> Book {
        Book {
            title: self.title.unwrap_or_default(),
            price: self
                .price
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| NO_PRICE.to_string()),
            url: self.image.unwrap_or_default(),
            link: self.url.unwrap_or_default(),
            ..Book::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_mapping() {
        let entry: SeedEntry = serde_json::from_str(
            r#"{"title":"Dune","price":"$15","image":"https://img/dune.jpg","url":"https://shop/dune"}"#,
        )
        .unwrap();
        let book = entry.into_book();

        assert_eq!(book.title, "Dune");
        assert_eq!(book.price, "$15");
        assert_eq!(book.url, "https://img/dune.jpg");
        assert_eq!(book.link, "https://shop/dune");
        assert!(book.author.is_empty());
        assert!(book.publisher.is_empty());
    }

    #[test]
    fn test_seed_list_with_numeric_price() {
        let entries: Vec<SeedEntry> = serde_json::from_str(
            r#"[{"title":"Dune","price":15},{"title":"Emma","price":"$3","image":null}]"#,
        )
        .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].clone().into_book().price, "15");
        assert_eq!(entries[1].clone().into_book().url, "");
    }

    #[test]
    fn test_seed_missing_fields() {
        let book = SeedEntry::default().into_book();
        assert_eq!(book.title, "");
        assert_eq!(book.price, NO_PRICE);
        assert_eq!(book.url, "");

        let book = SeedEntry {
            price: Some(String::new()),
            ..SeedEntry::default()
        }
        .into_book();
        assert_eq!(book.price, NO_PRICE);
    }
}
