//! CLI command implementations

mod delete;
mod edit;
mod list;
mod reset;
mod select;
mod shell;

pub use delete::delete;
pub use edit::{add, edit};
pub use list::list;
pub use reset::reset;
pub use select::select;
pub use shell::shell;

use bookcat_core::storage::LocalStorage;
use bookcat_core::{BookStore, CatalogController};
use std::path::Path;

/// Controller over the catalog stored in `dir`
pub type Controller = CatalogController<LocalStorage>;

/// Load the catalog stored under `dir`
pub fn open(dir: &Path) -> Controller {
    tracing::debug!("Opening catalog in {:?}", dir);
    CatalogController::new(BookStore::new(LocalStorage::new(dir)))
}
