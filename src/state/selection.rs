//! The set of tools the user has checked.

use std::collections::BTreeSet;

use crate::config::{Catalog, Tool};

/// Set of tool identifiers currently checked by the user.
///
/// Order of insertion is irrelevant: anything that turns a selection into
/// output walks the catalog, never this set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an id. Returns `true` if it was not already selected.
    pub fn insert(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    /// Remove an id. Returns `true` if it was selected.
    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Flip an id. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Drop ids the catalog no longer knows. Returns the dropped ids.
    pub fn retain_known(&mut self, catalog: &Catalog) -> Vec<String> {
        let stale: Vec<String> = self
            .ids
            .iter()
            .filter(|id| !catalog.contains(id))
            .cloned()
            .collect();

        for id in &stale {
            self.ids.remove(id);
        }

        stale
    }

    /// Selected tools in catalog order. Unknown ids are skipped.
    pub fn tools_in<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Tool> {
        catalog.tools().filter(|t| self.contains(&t.id)).collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }
}
