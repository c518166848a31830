//! Delete command implementation

use super::Controller;
use anyhow::{Context, Result};

/// Delete the selected book
pub fn delete(controller: &mut Controller) -> Result<()> {
    let removed = controller
        .delete()
        .context("Failed to delete the selected book")?;

    if removed.is_empty() {
        println!("No book selected");
    }
    for book in &removed {
        println!("Deleted '{}'", book.title);
    }
    Ok(())
}
