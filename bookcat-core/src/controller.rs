//! Catalog controller: owns the collection, filter and form state
//!
//! Every transition that touches the collection writes the whole catalog back
//! to storage before it takes effect in memory.

use crate::card::BookCard;
use crate::catalog::Catalog;
use crate::error::{CatalogError, FormError, Result};
use crate::form::{FormDraft, FormField, ModalForm, Mode};
use crate::price::PriceFilter;
use crate::storage::StorageProvider;
use crate::store::BookStore;
use crate::types::Book;

/// User interaction events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Toggle selection of the book at this catalog index
    Select(usize),
    Delete,
    StartEdit,
    StartCreate,
    SetField(FormField, String),
    Submit,
    Cancel,
    SetFilter(PriceFilter),
}

/// Top-level coordinator of the catalog
pub struct CatalogController<S> {
    store: BookStore<S>,
    catalog: Catalog,
    mode: Mode,
    filter: PriceFilter,
}

impl<S: StorageProvider> CatalogController<S> {
    /// Load the catalog from the store and start with the form closed
    pub fn new(store: BookStore<S>) -> Self {
        let catalog = store.load();
        Self {
            store,
            catalog,
            mode: Mode::Closed,
            filter: PriceFilter::All,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &BookStore<S> {
        &self.store
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn filter(&self) -> PriceFilter {
        self.filter
    }

    /// Whether Update and Delete are enabled
    pub fn has_selection(&self) -> bool {
        self.catalog.has_selection()
    }

    /// The open form, if any
    pub fn modal(&self) -> Option<ModalForm<'_>> {
        ModalForm::new(&self.mode)
    }

    /// Books passing the current filter, with their catalog index
    pub fn filtered_books(&self) -> Vec<(usize, &Book)> {
        self.catalog.filtered(self.filter).collect()
    }

    /// One card per book passing the current filter
    pub fn cards(&self) -> Vec<BookCard<'_>> {
        self.catalog
            .filtered(self.filter)
            .map(|(i, book)| BookCard::new(i, book, self.catalog.is_selected(i)))
            .collect()
    }

    /// Apply a user event
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        tracing::debug!("Dispatching {:?}", action);
        match action {
            Action::Select(index) => self.select(index),
            Action::Delete => self.delete().map(|_| ()),
            Action::StartEdit => {
                self.start_edit()?;
                Ok(())
            }
            Action::StartCreate => {
                self.start_create();
                Ok(())
            }
            Action::SetField(field, value) => Ok(self.set_field(field, value)?),
            Action::Submit => self.submit().map(|_| ()),
            Action::Cancel => {
                self.cancel();
                Ok(())
            }
            Action::SetFilter(filter) => {
                self.set_filter(filter);
                Ok(())
            }
        }
    }

    /// Toggle selection of the book at `index`
    pub fn select(&mut self, index: usize) -> Result<()> {
        self.ensure_closed()?;
        let mut next = self.catalog.clone();
        next.select(index)?;
        self.commit(next)
    }

    /// Remove the selected books; empty when nothing is selected
    pub fn delete(&mut self) -> Result<Vec<Book>> {
        self.ensure_closed()?;
        let mut next = self.catalog.clone();
        let removed = next.delete_selected();
        self.commit(next)?;
        for book in &removed {
            tracing::info!("Deleted '{}'", book.title);
        }
        Ok(removed)
    }

    /// Clear stored content and reload, which seeds the catalog again
    pub fn reset(&mut self) -> Result<()> {
        self.store.reset()?;
        self.catalog = self.store.load();
        self.mode = Mode::Closed;
        Ok(())
    }

    /// Open the form prefilled from the selected book.
    ///
    /// Returns `false` and leaves the form untouched when nothing is selected.
    pub fn start_edit(&mut self) -> Result<bool> {
        self.ensure_closed()?;
        let Some(index) = self.catalog.selected_index() else {
            return Ok(false);
        };
        let Some(book) = self.catalog.get(index) else {
            return Ok(false);
        };

        self.mode = Mode::Editing {
            index,
            draft: FormDraft::from_book(book),
        };
        Ok(true)
    }

    /// Open an empty form for a new book
    pub fn start_create(&mut self) {
        self.mode = Mode::Creating(FormDraft::default());
    }

    /// Update one input of the open form
    pub fn set_field(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) -> std::result::Result<(), FormError> {
        let draft = self.mode.draft_mut().ok_or(FormError::NotOpen)?;
        draft.set(field, value);
        Ok(())
    }

    /// Commit the open form.
    ///
    /// Editing replaces the target in place; creating appends. The new record
    /// has price `N/A`, its link mirrors the cover address and it is not
    /// selected. Returns the record's index. On error the form stays open.
    pub fn submit(&mut self) -> Result<usize> {
        let draft = self.mode.draft().ok_or(FormError::NotOpen)?;
        draft.validate()?;
        let book = draft.to_book();

        let mut next = self.catalog.clone();
        let index = match self.mode.edit_target() {
            Some(index) => {
                next.replace(index, book)
                    .map_err(|_| FormError::StaleEditTarget(index))?;
                index
            }
            None => {
                next.push(book);
                next.len() - 1
            }
        };

        self.commit(next)?;
        self.mode = Mode::Closed;
        tracing::info!("Saved book #{}", index);
        Ok(index)
    }

    /// Close the form, discarding the draft and any edit target
    pub fn cancel(&mut self) {
        self.mode = Mode::Closed;
    }

    pub fn set_filter(&mut self, filter: PriceFilter) {
        self.filter = filter;
    }

    /// The form covers the catalog, so clicks behind it are rejected
    fn ensure_closed(&self) -> Result<()> {
        if self.mode.is_open() {
            return Err(CatalogError::FormOpen);
        }
        Ok(())
    }

    /// Write `next` to storage, then adopt it. On failure nothing changes.
    fn commit(&mut self, next: Catalog) -> Result<()> {
        self.store.persist(&next)?;
        self.catalog = next;
        Ok(())
    }
}
