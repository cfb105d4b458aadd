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

//! Interactive track table widget.
//!
//! This component projects the controller's visible rows into a table and
//! maps keyboard input to cursor movement and selection actions. It holds
//! presentation state only: the cursor position and the column autofit flag.
//! Selection itself belongs to the table controller; selection keys are
//! reported back to the event loop as [`TrackTableAction`]s.

mod event;
mod render;

use ratatui::widgets::TableState;

/// Selection actions raised by the table for the event loop to apply through
/// the controller.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum TrackTableAction {
    ToggleRow(String),
    SelectVisible,
    InvertVisible,
    ClearSelection,
}

pub(crate) struct TrackTable {
    pub(crate) table_state: TableState,
    pub(crate) autofit: bool,
}

impl TrackTable {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
            autofit: false,
        }
    }

    /// Index of the row under the cursor, if any.
    pub(crate) fn cursor(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// Keeps the cursor inside the row range after the visible set changes.
    pub(crate) fn clamp_cursor(&mut self, len: usize) {
        match self.table_state.selected() {
            _ if len == 0 => self.table_state.select(None),
            None => self.table_state.select(Some(0)),
            Some(i) if i >= len => self.table_state.select(Some(len - 1)),
            Some(_) => {}
        }
    }

    fn goto_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        self.table_state.select_first();
    }

    fn goto_last(&mut self, len: usize) {
        if len > 0 {
            self.table_state.select(Some(len - 1));
        }
    }

    fn goto_half_page_forward(&mut self, len: usize, half_page: usize) {
        if len == 0 {
            return;
        }
        let i = self.table_state.selected().unwrap_or(0);
        self.table_state.select(Some((i + half_page).min(len - 1)));
    }

    fn goto_half_page_back(&mut self, half_page: usize) {
        let i = self.table_state.selected().unwrap_or(0);
        self.table_state.select(Some(i.saturating_sub(half_page)));
    }

    fn toggle_autofit(&mut self) {
        self.autofit = !self.autofit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_around() {
        let mut table = TrackTable::new();

        table.goto_next(3);
        assert_eq!(table.cursor(), Some(0));

        table.goto_next(3);
        table.goto_next(3);
        assert_eq!(table.cursor(), Some(2));

        table.goto_next(3);
        assert_eq!(table.cursor(), Some(0));
    }

    #[test]
    fn test_previous_wraps_around() {
        let mut table = TrackTable::new();

        table.goto_previous(3);
        assert_eq!(table.cursor(), Some(0));

        table.goto_previous(3);
        assert_eq!(table.cursor(), Some(2));
    }

    #[test]
    fn test_clamp_after_visible_set_shrinks() {
        let mut table = TrackTable::new();
        table.goto_last(10);
        assert_eq!(table.cursor(), Some(9));

        table.clamp_cursor(3);
        assert_eq!(table.cursor(), Some(2));

        table.clamp_cursor(0);
        assert_eq!(table.cursor(), None);
    }

    #[test]
    fn test_navigation_on_empty_table_is_a_noop() {
        let mut table = TrackTable::new();
        table.goto_next(0);
        table.goto_previous(0);
        table.goto_last(0);
        assert_eq!(table.cursor(), None);
    }
}
