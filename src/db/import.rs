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

//! Catalog JSON import.
//!
//! Parses the upstream catalog dataset: a JSON array of entries carrying a
//! video id, display fields, and a nested `metadata` object. Missing fields
//! degrade to empty strings; entries without a video id are skipped outright.

use std::fs;

use serde::Deserialize;
use thiserror::Error;

use crate::model::Record;

#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    #[error("failed to read catalog file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct RecordJson {
    #[serde(default)]
    youtube: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    filename: String,
    #[serde(default)]
    metadata: MetadataJson,
}

#[derive(Default, Deserialize)]
struct MetadataJson {
    #[serde(default)]
    title: String,
    #[serde(default)]
    year: Option<YearJson>,
}

// The dataset is inconsistent about whether `year` is a string or a number.
#[derive(Deserialize)]
#[serde(untagged)]
enum YearJson {
    Text(String),
    Number(i64),
}

impl YearJson {
    fn into_display(self) -> String {
        match self {
            YearJson::Text(text) => text,
            YearJson::Number(number) => number.to_string(),
        }
    }
}

impl RecordJson {
    fn into_record(self) -> Option<Record> {
        if self.youtube.is_empty() {
            return None;
        }

        Some(Record {
            id: self.youtube,
            title: self.metadata.title,
            description: self.description,
            filename: self.filename,
            year: self.metadata.year.map(YearJson::into_display),
        })
    }
}

/// Reads and parses a catalog JSON file.
pub(crate) fn load_catalog_file(path: &str) -> Result<Vec<Record>, CatalogError> {
    let json = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_string(),
        source,
    })?;

    parse_catalog(&json).map_err(|source| CatalogError::Parse {
        path: path.to_string(),
        source,
    })
}

/// Parses catalog JSON, preserving entry order and skipping id-less entries.
pub(crate) fn parse_catalog(json: &str) -> Result<Vec<Record>, serde_json::Error> {
    let entries: Vec<RecordJson> = serde_json::from_str(json)?;

    Ok(entries
        .into_iter()
        .filter_map(RecordJson::into_record)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_entry() {
        let json = r#"[{
            "youtube": "yt1",
            "description": "Opening theme",
            "filename": "song_a",
            "metadata": { "title": "Song A", "year": "2004" }
        }]"#;

        let records = parse_catalog(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "yt1");
        assert_eq!(records[0].title, "Song A");
        assert_eq!(records[0].description, "Opening theme");
        assert_eq!(records[0].filename, "song_a");
        assert_eq!(records[0].year.as_deref(), Some("2004"));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let json = r#"[{ "youtube": "yt1" }]"#;

        let records = parse_catalog(json).unwrap();
        assert_eq!(records[0].title, "");
        assert_eq!(records[0].description, "");
        assert_eq!(records[0].filename, "");
        assert!(records[0].year.is_none());
    }

    #[test]
    fn test_numeric_year_is_stringified() {
        let json = r#"[{ "youtube": "yt1", "metadata": { "title": "Song A", "year": 2004 } }]"#;

        let records = parse_catalog(json).unwrap();
        assert_eq!(records[0].year.as_deref(), Some("2004"));
    }

    #[test]
    fn test_entries_without_id_are_skipped() {
        let json = r#"[
            { "metadata": { "title": "No id" } },
            { "youtube": "yt2", "metadata": { "title": "Song B" } }
        ]"#;

        let records = parse_catalog(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "yt2");
    }

    #[test]
    fn test_order_is_preserved() {
        let json = r#"[
            { "youtube": "yt3" },
            { "youtube": "yt1" },
            { "youtube": "yt2" }
        ]"#;

        let ids: Vec<String> = parse_catalog(json).unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["yt3", "yt1", "yt2"]);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(parse_catalog("not json").is_err());
    }
}
