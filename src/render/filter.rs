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

//! Render the quick-filter input line.
//!
//! This module renders the visual representation of the filter box: the
//! current query text, the placeholder when empty, and the cursor while the
//! box has focus.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::App;

const PLACEHOLDER: &str = "Search for songs here.";

pub(crate) fn draw_filter_box(f: &mut Frame, area: Rect, app: &App) {
    let filter_box = &app.filter_box;

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    f.render_widget(
        Paragraph::new("/").style(Style::default().fg(app.theme.accent_colour)),
        container[0],
    );

    let value = filter_box.input.value();

    let (text, fg) = if value.is_empty() && !filter_box.active() {
        (PLACEHOLDER, app.theme.placeholder_colour)
    } else {
        (value, app.theme.table_title_fg)
    };

    f.render_widget(
        Paragraph::new(text).style(
            Style::default()
                .fg(fg)
                .bg(app.theme.input_bg_colour),
        ),
        container[1],
    );

    if filter_box.active() {
        let cursor_x = container[1].x + filter_box.input.cursor() as u16;
        let cursor_y = container[1].y;
        f.set_cursor_position((cursor_x, cursor_y));
    }
}
