use rustc_hash::FxHashMap;

use crate::scene::EntityMetadata;

/// Description used for exhibits missing from the catalogue.
pub const MISSING_DESCRIPTION: &str = "No description available.";

/// Exhibit metadata keyed by mesh name.
#[derive(Debug, Clone, Default)]
pub struct ExhibitCatalog {
    entries: FxHashMap<String, EntityMetadata>,
}

impl ExhibitCatalog {
    /// Empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the entry for `mesh`.
    pub fn insert(&mut self, mesh: impl Into<String>, metadata: EntityMetadata) {
        let _ = self.entries.insert(mesh.into(), metadata);
    }

    /// Catalogued metadata, if any.
    #[must_use]
    pub fn get(&self, mesh: &str) -> Option<&EntityMetadata> {
        self.entries.get(mesh)
    }

    /// Metadata for `mesh`, falling back to its name as the title.
    #[must_use]
    pub fn metadata_for(&self, mesh: &str) -> EntityMetadata {
        self.entries
            .get(mesh)
            .cloned()
            .unwrap_or_else(|| EntityMetadata::new(mesh, MISSING_DESCRIPTION))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalogue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
