use std::{collections::BTreeMap, sync::RwLock};

use jiff::Timestamp;
use thiserror::Error;

use solgain_core::{BuildingDesign, DesignId, DesignSource, DesignSpec};

/// Errors from design store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No design exists under the given id.
    #[error("design `{0}` not found")]
    NotFound(DesignId),
}

/// An in-memory design store.
///
/// Records live in a `BTreeMap` keyed by id, so the natural fetch order is
/// id order and stays deterministic for a given population. Interior
/// mutability makes the store shareable across request handlers; requests
/// never coordinate beyond the lock itself.
#[derive(Debug, Default)]
pub struct MemoryStore {
    designs: RwLock<BTreeMap<DesignId, BuildingDesign>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new design, assigning its id and timestamps.
    pub fn create(&self, spec: DesignSpec) -> BuildingDesign {
        let now = Timestamp::now();
        let design = BuildingDesign {
            id: DesignId::new(),
            name: spec.name,
            dimensions: spec.dimensions,
            wwr: spec.wwr,
            shgc: spec.shgc,
            skylight: spec.skylight,
            created_at: now,
            updated_at: now,
        };

        self.designs
            .write()
            .unwrap()
            .insert(design.id, design.clone());
        design
    }

    /// Returns every stored design in natural fetch order.
    #[must_use]
    pub fn list(&self) -> Vec<BuildingDesign> {
        self.designs.read().unwrap().values().cloned().collect()
    }

    /// Returns the design stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no such design exists.
    pub fn get(&self, id: DesignId) -> Result<BuildingDesign, StoreError> {
        self.designs
            .read()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Replaces every field of the design stored under `id`.
    ///
    /// The id and `created_at` are preserved; `updated_at` is refreshed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no such design exists.
    pub fn update(&self, id: DesignId, spec: DesignSpec) -> Result<BuildingDesign, StoreError> {
        let mut designs = self.designs.write().unwrap();
        let design = designs.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        design.name = spec.name;
        design.dimensions = spec.dimensions;
        design.wwr = spec.wwr;
        design.shgc = spec.shgc;
        design.skylight = spec.skylight;
        design.updated_at = Timestamp::now();

        Ok(design.clone())
    }

    /// Removes the design stored under `id`, invalidating the id for every
    /// other operation.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no such design exists.
    pub fn delete(&self, id: DesignId) -> Result<(), StoreError> {
        self.designs
            .write()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}

impl DesignSource for MemoryStore {
    fn get(&self, id: DesignId) -> Option<BuildingDesign> {
        self.designs.read().unwrap().get(&id).cloned()
    }

    fn get_many(&self, ids: &[DesignId]) -> Vec<BuildingDesign> {
        self.designs
            .read()
            .unwrap()
            .values()
            .filter(|design| ids.contains(&design.id))
            .cloned()
            .collect()
    }
}
