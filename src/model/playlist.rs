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

//! Playlist command derivation.
//!
//! The selection is rendered as a single download-tool invocation: the
//! configured command token followed by the selected video ids, space-joined,
//! in pick order. Ids pass through verbatim; quoting is the caller's problem.

/// Formats the download command for the given ids.
///
/// An empty selection yields an empty string; any placeholder text shown in
/// that case is a presentation concern.
pub(crate) fn playlist_command(command: &str, ids: &[String]) -> String {
    if ids.is_empty() {
        return String::new();
    }

    let mut out = String::from(command);
    for id in ids {
        out.push(' ');
        out.push_str(id);
    }
    out
}
