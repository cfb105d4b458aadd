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

//! Table state orchestration.
//!
//! [`TableController`] is the single owner of the record store, the filter
//! query and the selection. Every user input flows through one of its entry
//! points; the rendering layer holds no authoritative state and only projects
//! what the controller derives: the visible row sequence, selection
//! membership, and the generated playlist command.
//!
//! All entry points are total and synchronous. The two observable state axes
//! (query present, selection present) are independent of each other: changing
//! the filter never changes what is selected, only what is shown.

use crate::model::{
    Record,
    filter::filter_records,
    playlist::playlist_command,
    selection::Selection,
    store::RecordStore,
};

pub(crate) struct TableController {
    store: RecordStore,
    query: String,
    selection: Selection,
    command: String,

    // Derived on every mutation, read by the render layer.
    visible: Vec<Record>,
    playlist: String,
}

impl TableController {
    /// Creates an empty controller. `command` is the download-tool token
    /// prefixed to the generated playlist command.
    pub(crate) fn new(command: String) -> Self {
        Self {
            store: RecordStore::new(),
            query: String::new(),
            selection: Selection::new(),
            command,
            visible: Vec::new(),
            playlist: String::new(),
        }
    }

    /// Replaces the catalog wholesale.
    ///
    /// The selection is reconciled against the new id set, and the visible
    /// rows are recomputed against the current (possibly stale) query.
    pub(crate) fn on_source_replaced(&mut self, records: Vec<Record>) {
        self.store.replace(records);
        self.selection.reconcile(&self.store.id_set());
        self.recompute_visible();
        self.recompute_playlist();
    }

    /// Commits a new filter query and recomputes the visible rows.
    pub(crate) fn on_query_changed(&mut self, query: &str) {
        self.query = query.to_string();
        self.recompute_visible();
    }

    /// Toggles the selected state of one row.
    ///
    /// Ids not present in the current catalog are ignored.
    pub(crate) fn on_row_toggled(&mut self, id: &str) {
        if !self.store.contains(id) {
            return;
        }
        self.selection.toggle(id);
        self.recompute_playlist();
    }

    /// Deselects everything.
    pub(crate) fn on_clear_selected(&mut self) {
        self.selection.clear();
        self.recompute_playlist();
    }

    /// Selects every currently visible row, in visible order.
    ///
    /// Already-selected rows keep their position.
    pub(crate) fn on_select_visible(&mut self) {
        let ids: Vec<String> = self
            .visible
            .iter()
            .filter(|record| !self.selection.contains(&record.id))
            .map(|record| record.id.clone())
            .collect();

        for id in ids {
            self.selection.toggle(&id);
        }
        self.recompute_playlist();
    }

    /// Inverts the selected state of every currently visible row.
    pub(crate) fn on_invert_visible(&mut self) {
        let ids: Vec<String> = self.visible.iter().map(|record| record.id.clone()).collect();
        for id in ids {
            self.selection.toggle(&id);
        }
        self.recompute_playlist();
    }

    /// The rows matching the current query, in catalog order.
    pub(crate) fn visible(&self) -> &[Record] {
        &self.visible
    }

    /// True when the current query filters out every record. Drives the
    /// empty-state overlay.
    pub(crate) fn no_visible_rows(&self) -> bool {
        self.visible.is_empty()
    }

    pub(crate) fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Selected ids in pick order.
    pub(crate) fn selected_members(&self) -> &[String] {
        self.selection.members()
    }

    pub(crate) fn selection_count(&self) -> usize {
        self.selection.len()
    }

    /// The generated download command, empty when nothing is selected.
    pub(crate) fn playlist(&self) -> &str {
        &self.playlist
    }

    pub(crate) fn record_count(&self) -> usize {
        self.store.len()
    }

    fn recompute_visible(&mut self) {
        self.visible = filter_records(self.store.records(), &self.query)
            .into_iter()
            .cloned()
            .collect();
    }

    fn recompute_playlist(&mut self) {
        self.playlist = playlist_command(&self.command, self.selection.members());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str) -> Record {
        Record {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            filename: String::new(),
            year: None,
        }
    }

    fn controller() -> TableController {
        let mut controller = TableController::new("youtube-dl".to_string());
        controller.on_source_replaced(vec![record("yt1", "Song A"), record("yt2", "Song B")]);
        controller
    }

    #[test]
    fn test_filter_then_pick_in_click_order() {
        let mut c = controller();

        c.on_query_changed("song a");
        assert_eq!(c.visible().len(), 1);
        assert_eq!(c.visible()[0].id, "yt1");

        c.on_row_toggled("yt2");
        c.on_row_toggled("yt1");
        assert_eq!(c.selected_members(), ["yt2", "yt1"]);
        assert_eq!(c.playlist(), "youtube-dl yt2 yt1");
    }

    #[test]
    fn test_filtering_does_not_touch_selection() {
        let mut c = controller();
        c.on_row_toggled("yt1");
        c.on_row_toggled("yt2");

        c.on_query_changed("song b");
        assert_eq!(c.visible().len(), 1);
        assert_eq!(c.selected_members(), ["yt1", "yt2"]);

        c.on_query_changed("");
        assert_eq!(c.visible().len(), 2);
        assert_eq!(c.selected_members(), ["yt1", "yt2"]);
    }

    #[test]
    fn test_source_replacement_reconciles_selection() {
        let mut c = controller();
        c.on_row_toggled("yt1");
        c.on_row_toggled("yt2");

        c.on_source_replaced(vec![record("yt2", "Song B")]);
        assert_eq!(c.selected_members(), ["yt2"]);
        assert_eq!(c.playlist(), "youtube-dl yt2");
    }

    #[test]
    fn test_stale_query_applies_to_new_source() {
        let mut c = controller();
        c.on_query_changed("song b");

        c.on_source_replaced(vec![record("yt3", "Song C")]);
        assert!(c.no_visible_rows());
        assert_eq!(c.record_count(), 1);

        c.on_query_changed("");
        assert_eq!(c.visible().len(), 1);
    }

    #[test]
    fn test_clear_selected_empties_playlist() {
        let mut c = controller();
        c.on_row_toggled("yt1");
        c.on_row_toggled("yt2");
        assert_eq!(c.playlist(), "youtube-dl yt1 yt2");

        c.on_clear_selected();
        assert_eq!(c.playlist(), "");
        assert_eq!(c.selection_count(), 0);
    }

    #[test]
    fn test_no_visible_rows_flag() {
        let mut c = controller();
        assert!(!c.no_visible_rows());

        c.on_query_changed("no such song");
        assert!(c.no_visible_rows());

        c.on_query_changed("song");
        assert!(!c.no_visible_rows());
    }

    #[test]
    fn test_select_visible_respects_filter() {
        let mut c = controller();
        c.on_query_changed("song b");

        c.on_select_visible();
        assert_eq!(c.selected_members(), ["yt2"]);

        // Widening the filter does not select the newly visible rows.
        c.on_query_changed("");
        assert_eq!(c.selected_members(), ["yt2"]);
    }

    #[test]
    fn test_invert_visible() {
        let mut c = controller();
        c.on_row_toggled("yt1");

        c.on_invert_visible();
        assert!(!c.is_selected("yt1"));
        assert!(c.is_selected("yt2"));
        assert_eq!(c.playlist(), "youtube-dl yt2");
    }

    #[test]
    fn test_toggle_unknown_id_is_a_noop() {
        let mut c = controller();
        c.on_row_toggled("nope");

        assert!(c.selected_members().is_empty());
        assert_eq!(c.playlist(), "");
    }
}
