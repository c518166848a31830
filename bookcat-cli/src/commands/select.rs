//! Select command implementation

use super::Controller;
use anyhow::{Context, Result};

/// Toggle selection of the book at `index`
pub fn select(controller: &mut Controller, index: usize) -> Result<()> {
    controller
        .select(index)
        .with_context(|| format!("Failed to select book #{}", index))?;

    match controller.catalog().selected() {
        Some(book) => println!("Selected #{} '{}'", index, book.title),
        None => println!("Selection cleared"),
    }
    Ok(())
}
