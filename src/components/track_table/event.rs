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

//! Input handling and event processing for the track table.
//!
//! This module maps raw terminal keyboard events to table navigation and
//! selection actions. Navigation is applied directly to the cursor state;
//! selection keys produce a [`TrackTableAction`] for the event loop to route
//! through the table controller.

use crossterm::event::{Event, KeyCode, KeyModifiers};

use crate::{
    components::{TrackTable, TrackTableAction},
    model::Record,
};

const HALF_PAGE: usize = 10;

impl TrackTable {
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        visible: &[Record],
    ) -> Option<TrackTableAction> {
        let len = visible.len();

        match event {
            Event::Key(key_event) => match (key_event.code, key_event.modifiers) {
                (KeyCode::Char('j'), _) | (KeyCode::Down, _) => self.goto_next(len),
                (KeyCode::Char('k'), _) | (KeyCode::Up, _) => self.goto_previous(len),
                (KeyCode::Char('g'), _) => self.goto_first(),
                (KeyCode::Char('G'), _) => self.goto_last(len),

                (KeyCode::Char('d'), KeyModifiers::CONTROL) => {
                    self.goto_half_page_forward(len, HALF_PAGE)
                }
                (KeyCode::Char('u'), KeyModifiers::CONTROL) => self.goto_half_page_back(HALF_PAGE),

                (KeyCode::Char('f'), _) => self.toggle_autofit(),

                (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
                    return Some(TrackTableAction::SelectVisible);
                }
                (KeyCode::Char('t'), KeyModifiers::CONTROL) => {
                    return Some(TrackTableAction::InvertVisible);
                }
                (KeyCode::Char('l'), KeyModifiers::CONTROL) => {
                    return Some(TrackTableAction::ClearSelection);
                }

                (KeyCode::Char(' '), _) => {
                    let action = self.current_row_id(visible).map(TrackTableAction::ToggleRow);
                    self.goto_next(len);
                    return action;
                }

                (KeyCode::Backspace, _) => {
                    let action = self.current_row_id(visible).map(TrackTableAction::ToggleRow);
                    self.goto_previous(len);
                    return action;
                }

                _ => {}
            },

            _ => {}
        }

        None
    }

    fn current_row_id(&self, visible: &[Record]) -> Option<String> {
        self.cursor()
            .and_then(|i| visible.get(i))
            .map(|record| record.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn record(id: &str) -> Record {
        Record {
            id: id.to_string(),
            title: String::new(),
            description: String::new(),
            filename: String::new(),
            year: None,
        }
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_space_toggles_row_under_cursor_and_advances() {
        let mut table = TrackTable::new();
        let visible = vec![record("yt1"), record("yt2")];
        table.clamp_cursor(visible.len());

        let action = table.process_event(&key(KeyCode::Char(' '), KeyModifiers::NONE), &visible);
        assert_eq!(action, Some(TrackTableAction::ToggleRow("yt1".to_string())));
        assert_eq!(table.cursor(), Some(1));
    }

    #[test]
    fn test_space_on_empty_table_produces_no_action() {
        let mut table = TrackTable::new();
        let action = table.process_event(&key(KeyCode::Char(' '), KeyModifiers::NONE), &[]);
        assert_eq!(action, None);
    }

    #[test]
    fn test_selection_chords_map_to_actions() {
        let mut table = TrackTable::new();
        let visible = vec![record("yt1")];

        let action = table.process_event(&key(KeyCode::Char('a'), KeyModifiers::CONTROL), &visible);
        assert_eq!(action, Some(TrackTableAction::SelectVisible));

        let action = table.process_event(&key(KeyCode::Char('t'), KeyModifiers::CONTROL), &visible);
        assert_eq!(action, Some(TrackTableAction::InvertVisible));

        let action = table.process_event(&key(KeyCode::Char('l'), KeyModifiers::CONTROL), &visible);
        assert_eq!(action, Some(TrackTableAction::ClearSelection));
    }

    #[test]
    fn test_autofit_toggle() {
        let mut table = TrackTable::new();
        assert!(!table.autofit);

        table.process_event(&key(KeyCode::Char('f'), KeyModifiers::NONE), &[]);
        assert!(table.autofit);

        table.process_event(&key(KeyCode::Char('f'), KeyModifiers::NONE), &[]);
        assert!(!table.autofit);
    }
}
