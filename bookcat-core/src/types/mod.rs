//! Record types for the book catalog

mod book;
mod lenient;
mod seed;

pub use book::{Book, StoredBook, NO_PRICE};
pub use seed::SeedEntry;
