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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

mod filter;
mod playlist;

use std::fmt::Write;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::App;

/// Renders the user interface to the terminal frame.
///
/// The screen is a single vertical stack: a header with catalog counts, the
/// quick-filter line, the track table, the generated playlist command, and a
/// status line.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);
    filter::draw_filter_box(f, outer[1], app);
    app.track_table.draw(f, outer[2], &app.controller, &app.theme);
    playlist::draw_playlist_bar(f, outer[3], app);
    draw_status(f, outer[4], app);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let mut header_text = format!(
        "Tracks | {} songs | {} shown",
        app.controller.record_count(),
        app.controller.visible().len(),
    );

    let selected_count = app.controller.selection_count();
    if selected_count > 0 {
        let _ = write!(header_text, " | {} selected", selected_count);
    }

    let header = Paragraph::new(header_text)
        .style(Style::default().fg(app.theme.accent_colour))
        .block(header_block);

    f.render_widget(header, area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let text = match &app.status {
        Some(message) => message.clone(),
        None => status_line(app),
    };

    let status = Paragraph::new(text).style(Style::default().fg(app.theme.status_colour));
    f.render_widget(status, area);
}

// The idle status line: the video URL for the row under the cursor, plus the
// key hints.
fn status_line(app: &App) -> String {
    let url = app
        .track_table
        .cursor()
        .and_then(|i| app.controller.visible().get(i))
        .map(|record| record.video_url());

    let hints = "/ filter  space select  c clear  f fit  z import  q quit";

    match url {
        Some(url) => format!("{}  |  {}", url, hints),
        None => hints.to_string(),
    }
}
