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

//! Quick-filter matching over track records.
//!
//! A record is visible when the query is a case-insensitive substring of at
//! least one of its searchable fields: title, description, filename and year.
//! Exact substring semantics only; there is no tokenization and no fuzzy
//! matching.

use crate::model::Record;

/// Returns the records matching `query`, preserving catalog order.
///
/// An empty (or whitespace-only) query matches everything. The result is
/// always an order-preserving subsequence of `records`.
pub(crate) fn filter_records<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| matches_record(record, &query))
        .collect()
}

// `query` must already be trimmed and lower-cased.
fn matches_record(record: &Record, query: &str) -> bool {
    let year = record.year.as_deref().unwrap_or("");

    [
        record.title.as_str(),
        record.description.as_str(),
        record.filename.as_str(),
        year,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str, description: &str, filename: &str, year: Option<&str>) -> Record {
        Record {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            filename: filename.to_string(),
            year: year.map(str::to_string),
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            record("yt1", "Song A", "Opening theme", "song_a.mp3", Some("2004")),
            record("yt2", "Song B", "Battle theme", "song_b.mp3", None),
            record("yt3", "Interlude", "Quiet piano piece", "interlude.mp3", Some("2010")),
        ]
    }

    #[test]
    fn test_empty_query_returns_all_records() {
        let records = sample();
        let visible = filter_records(&records, "");
        assert_eq!(visible.len(), records.len());

        let visible = filter_records(&records, "   ");
        assert_eq!(visible.len(), records.len());
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let records = sample();
        let visible = filter_records(&records, "theme");
        let ids: Vec<&str> = visible.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["yt1", "yt2"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let records = sample();
        let upper = filter_records(&records, "SONG A");
        let lower = filter_records(&records, "song a");
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].id, lower[0].id);
    }

    #[test]
    fn test_matches_any_searchable_field() {
        let records = sample();

        // Description only
        let visible = filter_records(&records, "piano");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "yt3");

        // Filename only
        let visible = filter_records(&records, "song_b");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "yt2");

        // Year only
        let visible = filter_records(&records, "2004");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "yt1");
    }

    #[test]
    fn test_absent_year_matches_nothing() {
        let records = sample();
        let visible = filter_records(&records, "2099");
        assert!(visible.is_empty());
    }

    #[test]
    fn test_no_matches_yields_empty() {
        let records = sample();
        assert!(filter_records(&records, "zzz").is_empty());
    }
}
