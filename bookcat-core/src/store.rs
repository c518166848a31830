//! Book store: loads the catalog from storage and writes it back

use crate::catalog::Catalog;
use crate::error::{Result, StorageError};
use crate::storage::StorageProvider;
use crate::types::{SeedEntry, StoredBook};

/// Storage key holding the serialized catalog
pub const STORAGE_KEY: &str = "bookCatalog";

const BUNDLED_SEED: &str = include_str!("../data/books.json");

/// Entries of the seed list shipped with the crate
pub fn bundled_seed() -> Vec<SeedEntry> {
    match serde_json::from_str(BUNDLED_SEED) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Bundled seed data is unreadable: {}", e);
            Vec::new()
        }
    }
}

/// Source of truth for the catalog between sessions
pub struct BookStore<S> {
    storage: S,
    seed: Vec<SeedEntry>,
}

impl<S: StorageProvider> BookStore<S> {
    /// Create a store seeded from the bundled entries
    pub fn new(storage: S) -> Self {
        Self::with_seed(storage, bundled_seed())
    }

    /// Create a store with a custom seed list
    pub fn with_seed(storage: S, seed: Vec<SeedEntry>) -> Self {
        Self { storage, seed }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the catalog.
    ///
    /// Stored content is returned as-is when it parses. Unreadable or
    /// malformed content yields an empty catalog. When nothing (or an empty
    /// value) is stored the seed entries are mapped into records.
    pub fn load(&self) -> Catalog {
        let stored = match self.storage.get(STORAGE_KEY) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("Failed to read stored catalog, starting empty: {}", e);
                return Catalog::new();
            }
        };

        match stored.filter(|data| !data.is_empty()) {
            Some(data) => match serde_json::from_str::<Vec<StoredBook>>(&data) {
                Ok(records) => {
                    tracing::debug!("Loaded {} books from storage", records.len());
                    Catalog::from_records(records)
                }
                Err(e) => {
                    tracing::warn!("Stored catalog is malformed, starting empty: {}", e);
                    Catalog::new()
                }
            },
            None => {
                tracing::info!("No stored catalog, seeding {} books", self.seed.len());
                self.seed
                    .iter()
                    .cloned()
                    .map(SeedEntry::into_book)
                    .collect::<Vec<_>>()
                    .into()
            }
        }
    }

    /// Drop the stored catalog so the next `load` seeds again
    pub fn reset(&self) -> Result<()> {
        match self.storage.remove(STORAGE_KEY) {
            Ok(()) | Err(StorageError::NotFound(_)) => {
                tracing::info!("Cleared stored catalog");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Serialize the whole catalog and write it under the storage key
    pub fn persist(&self, catalog: &Catalog) -> Result<()> {
        let data = serde_json::to_string(&catalog.to_records())?;
        self.storage.set(STORAGE_KEY, &data)?;
        tracing::debug!("Persisted {} books", catalog.len());
        Ok(())
    }
}
