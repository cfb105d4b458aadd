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

//! Render the playlist command panel.
//!
//! This module renders the read-only field holding the generated download
//! command for the current selection, or a placeholder prompt while nothing
//! is selected.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::App;

const PLACEHOLDER: &str = "Select songs to generate a playlist command.";

pub(crate) fn draw_playlist_bar(f: &mut Frame, area: Rect, app: &App) {
    let playlist = app.controller.playlist();

    let (text, fg) = if playlist.is_empty() {
        (PLACEHOLDER, app.theme.placeholder_colour)
    } else {
        (playlist, app.theme.accent_colour)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1))
        .title("Playlist");

    let panel = Paragraph::new(text)
        .style(Style::default().fg(fg))
        .block(block);

    f.render_widget(panel, area);
}
