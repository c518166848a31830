//! Bookcat Core Library
//!
//! This crate provides the book catalog: records, price filtering, the
//! storage port, the create/edit form and the controller that ties them
//! together. Front ends drive the controller with [`Action`]s and render
//! its [`BookCard`]s and [`ModalForm`].

pub mod card;
pub mod catalog;
pub mod controller;
pub mod error;
pub mod form;
pub mod price;
pub mod storage;
pub mod store;
pub mod types;

pub use card::BookCard;
pub use catalog::Catalog;
pub use controller::{Action, CatalogController};
pub use error::{CatalogError, FormError, Result, StorageError};
pub use form::{FormDraft, FormField, ModalForm, Mode};
pub use price::{parse_price, PriceFilter};
pub use store::{BookStore, STORAGE_KEY};
pub use types::{Book, SeedEntry, StoredBook, NO_PRICE};
