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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), background worker updates
//! (catalog load and import), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function routes each event through
//!    the table controller's entry points and the component input handlers.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    actions::commands::AppCommand,
    components::TrackTableAction,
    model::Record,
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    /// A fresh record array from the catalog worker; replaces the table
    /// source wholesale.
    CatalogLoaded(Vec<Record>),

    /// A catalog import finished, with the number of records imported.
    CatalogImported(usize),

    /// The filter box committed a new query string.
    QueryChanged(String),

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,

            AppEvent::CatalogLoaded(records) => {
                app.controller.on_source_replaced(records);
                app.track_table.clamp_cursor(app.controller.visible().len());
            }

            AppEvent::CatalogImported(count) => {
                app.status = Some(format!("Imported {} songs", count));
            }

            AppEvent::QueryChanged(query) => {
                app.controller.on_query_changed(&query);
                app.track_table.clamp_cursor(app.controller.visible().len());
            }

            AppEvent::Error(message) => app.status = Some(message),

            AppEvent::Tick => {}

            _ => {}
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Maps keyboard input to application actions.
///
/// Input is offered to each layer in priority order: the filter box (which
/// consumes everything while focused), then the track table (navigation and
/// selection), then the global bindings.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Any keypress dismisses a transient status message.
    app.status = None;

    let event = Event::Key(key);

    if app.filter_box.handle_event(&event, &app.event_tx) {
        return Ok(());
    }

    if let Some(action) = app.track_table.process_event(&event, app.controller.visible()) {
        apply_table_action(app, action);
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn apply_table_action(app: &mut App, action: TrackTableAction) {
    match action {
        TrackTableAction::ToggleRow(id) => app.controller.on_row_toggled(&id),
        TrackTableAction::SelectVisible => app.controller.on_select_visible(),
        TrackTableAction::InvertVisible => app.controller.on_invert_visible(),
        TrackTableAction::ClearSelection => app.controller.on_clear_selected(),
    }
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        // Clear Selected
        KeyCode::Char('c') => app.controller.on_clear_selected(),

        // Reload the catalog from the database
        KeyCode::Char('r') => app.command_tx.send(AppCommand::LoadCatalog)?,

        // Re-import the configured catalog file
        KeyCode::Char('z') => app.command_tx.send(AppCommand::ImportCatalog)?,

        _ => {}
    }

    Ok(())
}
