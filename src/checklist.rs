//! Checklist State
//!
//! Pure view-model logic: the checked-set, toggle transitions and the
//! search filter. No Leptos or Tauri in here.

use std::collections::{BTreeMap, BTreeSet};
use crate::models::Pokemon;

/// Write to send after a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistAction {
    Upsert(u32),
    Delete(u32),
}

/// In-memory checked-set, mirroring the persisted marks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChecklistState {
    checked: BTreeSet<u32>,
    loaded: bool,
    /// Membership after each toggle made before the persisted marks arrived
    early_toggles: BTreeMap<u32, bool>,
}

impl ChecklistState {
    pub fn is_checked(&self, id: u32) -> bool {
        self.checked.contains(&id)
    }

    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.checked.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// Flip membership of `id` and return the write for that transition
    pub fn toggle(&mut self, id: u32) -> PersistAction {
        let now_checked = self.checked.insert(id);
        if !now_checked {
            self.checked.remove(&id);
        }

        if !self.loaded {
            self.early_toggles.insert(id, now_checked);
        }

        if now_checked {
            PersistAction::Upsert(id)
        } else {
            PersistAction::Delete(id)
        }
    }

    /// Replace the set with the persisted marks, then replay toggles made
    /// while they were loading.
    pub fn apply_loaded(&mut self, ids: impl IntoIterator<Item = u32>) {
        self.checked = ids.into_iter().collect();
        for (id, checked) in std::mem::take(&mut self.early_toggles) {
            if checked {
                self.checked.insert(id);
            } else {
                self.checked.remove(&id);
            }
        }
        self.loaded = true;
    }

    /// Persisted marks are unavailable; keep whatever was toggled so far
    pub fn mark_load_failed(&mut self) {
        self.early_toggles.clear();
        self.loaded = true;
    }
}

/// Search text as stored: lowercased input
pub fn normalize_search(input: &str) -> String {
    input.to_lowercase()
}

/// Case-insensitive substring match on the display name
pub fn matches_search(pokemon: &Pokemon, search: &str) -> bool {
    pokemon.name.to_lowercase().contains(search)
}

/// Catalog entries shown for `search`, in catalog order
pub fn filter_catalog(catalog: &[Pokemon], search: &str) -> Vec<Pokemon> {
    catalog
        .iter()
        .filter(|p| matches_search(p, search))
        .cloned()
        .collect()
}

/// CSS class of a tile; `checked` carries the highlight background
pub fn tile_class(checked: bool) -> &'static str {
    if checked {
        "pokemon-tile checked"
    } else {
        "pokemon-tile"
    }
}

/// How many catalog entries are checked. Marks for unknown ids don't count.
pub fn checked_in_catalog(catalog: &[Pokemon], state: &ChecklistState) -> usize {
    catalog.iter().filter(|p| state.is_checked(p.id)).count()
}
