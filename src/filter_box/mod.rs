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

//! Quick-filter input logic and state management.
//!
//! This module implements the free-text filter box above the track table,
//! handling a text input component and committing the query on every edit so
//! the table narrows as the user types. Enter and Esc both leave input mode;
//! the query text stays applied until changed.

use std::sync::mpsc::Sender;

use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::actions::events::AppEvent;

pub(crate) struct FilterBox {
    active: bool,
    pub(crate) input: Input,
}

impl FilterBox {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Handles a terminal event, returning `true` when it was consumed.
    ///
    /// While inactive, only `/` is consumed (entering input mode). While
    /// active, every key is consumed; edits that change the buffer commit a
    /// [`AppEvent::QueryChanged`].
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> bool {
        if self.active {
            match event {
                Event::Key(key_event) => match key_event.code {
                    KeyCode::Esc | KeyCode::Enter => {
                        // Blur only; the committed query stays applied.
                        self.active = false;
                        true
                    }

                    _ => {
                        let before = self.input.value().to_string();
                        self.input.handle_event(event);

                        if self.input.value() != before {
                            let _ = event_tx.send(AppEvent::QueryChanged(self.input.value().to_string()));
                        }

                        true
                    }
                },

                _ => false,
            }
        } else {
            match event {
                Event::Key(key_event) => match key_event.code {
                    KeyCode::Char('/') => {
                        self.active = true;
                        true
                    }

                    _ => false,
                },

                _ => false,
            }
        }
    }
}
