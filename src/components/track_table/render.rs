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

//! UI rendering logic for the track table.
//!
//! This module handles the visual representation of the visible records,
//! including column layout, selection highlighting and the no-rows overlay.
//! Column widths are proportional by default; the autofit flag switches to
//! content-width sizing, the terminal equivalent of the grid's fit-columns
//! hint.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Cell, Paragraph, Row, Table},
};

use crate::{
    components::TrackTable, model::Record, model::table::TableController, theme::Theme,
    util::format::elide,
};

const DESCRIPTION_MAX: usize = 80;

// Column cap when autofitting, so one long cell cannot swallow the layout.
const AUTOFIT_MAX: u16 = 48;

impl TrackTable {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        controller: &TableController,
        theme: &Theme,
    ) {
        if controller.no_visible_rows() {
            self.draw_no_rows_overlay(f, area, controller, theme);
            return;
        }

        self.draw_table(f, area, controller, theme);
    }

    fn draw_table(
        &mut self,
        f: &mut Frame,
        area: Rect,
        controller: &TableController,
        theme: &Theme,
    ) {
        let visible = controller.visible();

        let rows = visible.iter().map(|record| {
            let selected = controller.is_selected(&record.id);
            let selection_indicator = if selected {
                Line::from("+").style(Style::default().fg(Color::Black).bg(theme.accent_colour))
            } else {
                Line::from("")
            };

            let year = record.year.as_deref().unwrap_or("");

            Row::new(vec![
                Cell::from(selection_indicator),
                Cell::from(
                    Line::from(record.title.as_str()).style(Style::default().fg(theme.table_title_fg)),
                ),
                Cell::from(
                    Line::from(elide(&record.description, DESCRIPTION_MAX))
                        .style(Style::default().fg(theme.table_description_fg)),
                ),
                Cell::from(
                    Line::from(record.filename.as_str())
                        .style(Style::default().fg(theme.table_filename_fg)),
                ),
                Cell::from(
                    Line::from(year.to_string())
                        .style(Style::default().fg(theme.table_year_fg))
                        .alignment(Alignment::Right),
                ),
            ])
        });

        let table = Table::new(rows, self.column_constraints(visible))
            .header(
                Row::new(vec![
                    Cell::from(""),
                    Cell::from("Song Name"),
                    Cell::from("Description"),
                    Cell::from("Filename"),
                    Cell::from(Line::from("Year").alignment(Alignment::Right)),
                ])
                .style(Style::default().bold().fg(theme.accent_colour))
                .bottom_margin(1),
            )
            .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
            .block(Block::default());

        self.clamp_cursor(visible.len());

        let state = &mut self.table_state;
        f.render_stateful_widget(table, area, state);
    }

    fn column_constraints(&self, visible: &[Record]) -> [Constraint; 5] {
        if self.autofit {
            [
                Constraint::Length(1),
                Constraint::Length(fit_width(visible, "Song Name", |r| &r.title)),
                Constraint::Length(fit_width(visible, "Description", |r| &r.description)),
                Constraint::Length(fit_width(visible, "Filename", |r| &r.filename)),
                Constraint::Length(fit_width(visible, "Year", |r| {
                    r.year.as_deref().unwrap_or("")
                })),
            ]
        } else {
            [
                Constraint::Length(1),
                Constraint::Percentage(30),
                Constraint::Percentage(35),
                Constraint::Percentage(25),
                Constraint::Length(5),
            ]
        }
    }

    fn draw_no_rows_overlay(
        &mut self,
        f: &mut Frame,
        area: Rect,
        controller: &TableController,
        theme: &Theme,
    ) {
        self.clamp_cursor(0);

        if area.height == 0 {
            return;
        }

        let message = if controller.record_count() == 0 {
            "Catalog is empty. Press z to import the configured catalog file."
        } else {
            "No songs match the current filter."
        };

        let overlay = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.overlay_colour))
            .block(Block::default());

        let y = area.y + area.height / 2;
        let centered = Rect::new(area.x, y.min(area.bottom().saturating_sub(1)), area.width, 1);
        f.render_widget(overlay, centered);
    }
}

fn fit_width<'a>(visible: &'a [Record], header: &str, field: impl Fn(&'a Record) -> &'a str) -> u16 {
    let widest = visible
        .iter()
        .map(|record| field(record).chars().count())
        .max()
        .unwrap_or(0)
        .max(header.chars().count());

    (widest as u16).min(AUTOFIT_MAX)
}
