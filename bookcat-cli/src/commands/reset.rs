//! Reset command implementation

use super::Controller;
use anyhow::{Context, Result};

/// Discard the stored catalog and start again from the bundled books
pub fn reset(controller: &mut Controller) -> Result<()> {
    controller
        .reset()
        .context("Failed to clear the stored catalog")?;

    println!("Catalog reset to {} books", controller.catalog().len());
    Ok(())
}
