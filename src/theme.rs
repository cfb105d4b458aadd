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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) placeholder_colour: Color,
    pub(crate) overlay_colour: Color,
    pub(crate) status_colour: Color,
    pub(crate) input_bg_colour: Color,

    pub(crate) table_title_fg: Color,
    pub(crate) table_description_fg: Color,
    pub(crate) table_filename_fg: Color,
    pub(crate) table_year_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            placeholder_colour: Color::Rgb(120, 120, 126),
            overlay_colour: Color::Rgb(162, 161, 166),
            status_colour: Color::Rgb(162, 161, 166),
            input_bg_colour: Color::Rgb(50, 30, 60),

            table_title_fg: Color::Rgb(255, 255, 255),
            table_description_fg: Color::Rgb(179, 157, 219),
            table_filename_fg: Color::Rgb(162, 161, 166),
            table_year_fg: Color::Rgb(255, 215, 0),
        }
    }
}
