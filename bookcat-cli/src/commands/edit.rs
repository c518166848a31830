//! Add and edit command implementations

use super::Controller;
use anyhow::{Context, Result};
use bookcat_core::{CatalogError, FormField};

/// Add a new book through the create form
pub fn add(controller: &mut Controller, title: String, author: String, url: String) -> Result<()> {
    controller.start_create();
    controller.set_field(FormField::Title, title)?;
    controller.set_field(FormField::Author, author)?;
    controller.set_field(FormField::Url, url)?;

    let index = controller.submit().context("Failed to add book")?;
    println!("Added #{} '{}'", index, controller.catalog().books()[index].title);
    Ok(())
}

/// Edit the selected book, overriding only the given fields
pub fn edit(
    controller: &mut Controller,
    title: Option<String>,
    author: Option<String>,
    url: Option<String>,
) -> Result<()> {
    if !controller.start_edit()? {
        return Err(CatalogError::NoSelection).context("Select a book before editing");
    }

    let changes = [
        (FormField::Title, title),
        (FormField::Author, author),
        (FormField::Url, url),
    ];
    for (field, value) in changes {
        if let Some(value) = value {
            controller.set_field(field, value)?;
        }
    }

    let index = controller.submit().context("Failed to update book")?;
    println!("Updated #{} '{}'", index, controller.catalog().books()[index].title);
    Ok(())
}
