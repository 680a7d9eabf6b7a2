use super::{WindowId, WindowPatch, WindowRecord};
use crate::errors::{DeskError, Result};
use serde::{Deserialize, Serialize};

/// The fixed set of shell windows, in the order they were registered.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct WindowRegistry {
    entries: Vec<(WindowId, WindowRecord)>,
}

impl WindowRegistry {
    #[must_use]
    pub fn new(entries: Vec<(WindowId, WindowRecord)>) -> Self {
        Self { entries }
    }

    /// # Errors
    ///
    /// Will error with `UnknownWindow` if `id` was never registered.
    pub fn get(&self, id: &WindowId) -> Result<&WindowRecord> {
        self.entries
            .iter()
            .find(|(known, _)| known == id)
            .map(|(_, record)| record)
            .ok_or_else(|| DeskError::UnknownWindow(id.clone()))
    }

    /// Replace the record for `id` with the result of merging `patch` into it.
    ///
    /// # Errors
    ///
    /// Will error with `UnknownWindow` if `id` was never registered.
    pub fn set(&mut self, id: &WindowId, patch: WindowPatch) -> Result<&WindowRecord> {
        let (_, record) = self
            .entries
            .iter_mut()
            .find(|(known, _)| known == id)
            .ok_or_else(|| DeskError::UnknownWindow(id.clone()))?;
        *record = patch.merge(record);
        Ok(record)
    }

    pub fn all(&self) -> impl Iterator<Item = (&WindowId, &WindowRecord)> {
        self.entries.iter().map(|(id, record)| (id, record))
    }

    #[must_use]
    pub fn contains(&self, id: &WindowId) -> bool {
        self.entries.iter().any(|(known, _)| known == id)
    }

    /// Open windows ordered from the top most down.
    #[must_use]
    pub fn stacking_order(&self) -> Vec<WindowId> {
        let mut open: Vec<&(WindowId, WindowRecord)> =
            self.entries.iter().filter(|(_, r)| r.is_open).collect();
        open.sort_by(|a, b| b.1.z_index.cmp(&a.1.z_index));
        open.into_iter().map(|(id, _)| id.clone()).collect()
    }
}
