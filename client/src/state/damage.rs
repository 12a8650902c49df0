//! Damage report list state for the company review page.

#[cfg(test)]
#[path = "damage_test.rs"]
mod damage_test;

use crate::net::types::{DamageReport, DamageStatus};

#[derive(Clone, Debug, PartialEq)]
pub struct DamageReportsState {
    pub items: Vec<DamageReport>,
    pub loading: bool,
    pub error: Option<String>,
    /// Report currently being updated; its button is disabled.
    pub updating: Option<String>,
}

impl Default for DamageReportsState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None, updating: None }
    }
}

impl DamageReportsState {
    /// Swap in the server's copy of an updated report, matched by id. The
    /// pending update is finished either way.
    pub fn apply_update(&mut self, updated: DamageReport) {
        self.updating = None;
        if let Some(slot) = self.items.iter_mut().find(|r| r.id == updated.id) {
            *slot = updated;
        }
    }

    pub fn unresolved_count(&self) -> usize {
        self.items.iter().filter(|r| r.status != DamageStatus::Resolved).count()
    }
}
