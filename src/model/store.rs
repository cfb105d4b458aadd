// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Record catalog storage for the current session.
//!
//! This module provides the in-memory record store backing the track table.
//! Insertion order is the display-order baseline. The store is replaced
//! wholesale when a new catalog arrives; there is no merge or per-record
//! deletion.

use std::collections::HashSet;

use crate::model::Record;

#[derive(Default)]
pub(crate) struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire catalog with a new record sequence.
    pub(crate) fn replace(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    pub(crate) fn records(&self) -> &[Record] {
        &self.records
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn contains(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    /// The set of ids currently present, used to reconcile the selection
    /// whenever the catalog is swapped.
    pub(crate) fn id_set(&self) -> HashSet<String> {
        self.records.iter().map(|r| r.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> Record {
        Record {
            id: id.to_string(),
            title: String::new(),
            description: String::new(),
            filename: String::new(),
            year: None,
        }
    }

    #[test]
    fn test_replace_swaps_wholesale() {
        let mut store = RecordStore::new();
        store.replace(vec![record("a"), record("b")]);
        assert_eq!(store.len(), 2);

        store.replace(vec![record("c")]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].id, "c");
    }

    #[test]
    fn test_id_set_contains_all_ids() {
        let mut store = RecordStore::new();
        store.replace(vec![record("a"), record("b")]);

        let ids = store.id_set();
        assert!(ids.contains("a"));
        assert!(ids.contains("b"));
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = RecordStore::new();
        assert!(store.is_empty());
        assert!(store.id_set().is_empty());
    }
}
