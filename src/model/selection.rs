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

//! Track selection state.
//!
//! The selection is a set of record ids that remembers toggle order, since
//! the generated playlist command lists tracks in the order they were picked.
//! Membership is tracked independently of filter visibility: filtering a row
//! out of view does not deselect it.

use std::collections::HashSet;

#[derive(Default)]
pub(crate) struct Selection {
    // Toggle order for formatting; the set mirrors it for O(1) membership.
    ordered: Vec<String>,
    members: HashSet<String>,
}

impl Selection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds `id` to the selection, or removes it if already selected.
    ///
    /// A re-added id moves to the most-recent position.
    pub(crate) fn toggle(&mut self, id: &str) {
        if self.members.remove(id) {
            self.ordered.retain(|member| member != id);
        } else {
            self.members.insert(id.to_string());
            self.ordered.push(id.to_string());
        }
    }

    pub(crate) fn clear(&mut self) {
        self.ordered.clear();
        self.members.clear();
    }

    /// Drops any selected id not present in `valid`, preserving the relative
    /// order of the survivors. Invoked whenever the catalog is replaced so
    /// the selection never references a stale record.
    pub(crate) fn reconcile(&mut self, valid: &HashSet<String>) {
        self.ordered.retain(|id| valid.contains(id));
        self.members.retain(|id| valid.contains(id));
    }

    /// Selected ids in toggle order.
    pub(crate) fn members(&self) -> &[String] {
        &self.ordered
    }

    pub(crate) fn contains(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    pub(crate) fn len(&self) -> usize {
        self.ordered.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = Selection::new();

        selection.toggle("yt1");
        assert!(selection.contains("yt1"));
        assert_eq!(selection.len(), 1);

        selection.toggle("yt1");
        assert!(!selection.contains("yt1"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_members_in_toggle_order() {
        let mut selection = Selection::new();
        selection.toggle("yt2");
        selection.toggle("yt1");
        selection.toggle("yt3");

        assert_eq!(selection.members(), ["yt2", "yt1", "yt3"]);
    }

    #[test]
    fn test_retoggle_moves_to_most_recent() {
        let mut selection = Selection::new();
        selection.toggle("yt1");
        selection.toggle("yt2");

        selection.toggle("yt1");
        selection.toggle("yt1");

        assert_eq!(selection.members(), ["yt2", "yt1"]);
    }

    #[test]
    fn test_clear_empties_selection() {
        let mut selection = Selection::new();
        selection.toggle("yt1");
        selection.toggle("yt2");

        selection.clear();
        assert!(selection.is_empty());
        assert!(selection.members().is_empty());
    }

    #[test]
    fn test_reconcile_drops_stale_ids() {
        let mut selection = Selection::new();
        selection.toggle("yt1");
        selection.toggle("yt2");
        selection.toggle("yt3");

        let valid: HashSet<String> = ["yt3".to_string(), "yt1".to_string()].into();
        selection.reconcile(&valid);

        assert_eq!(selection.members(), ["yt1", "yt3"]);
        assert!(!selection.contains("yt2"));
    }

    #[test]
    fn test_reconcile_against_empty_set_clears() {
        let mut selection = Selection::new();
        selection.toggle("yt1");

        selection.reconcile(&HashSet::new());
        assert!(selection.is_empty());
    }
}
