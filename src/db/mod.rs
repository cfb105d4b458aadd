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

//! Data access layer.
//!
//! This module handles all interactions with the SQLite catalog: schema
//! creation, fetching the record list, and replacing it wholesale when a new
//! catalog is imported.
//!
//! # Tables
//!
//! * `records` - One row per track: video id, display metadata.
//!
//! Row order (`rowid`) preserves import order, which is the display-order
//! baseline for the table.

pub(crate) mod import;
mod model;

use anyhow::{Context, Result};
use rusqlite::{Connection, params};

use crate::model::Record;

/// Opens a connection to the SQLite catalog and configures it.
///
/// Enables WAL journaling, tunes synchronous mode, and ensures the schema
/// exists.
///
/// # Errors
///
/// Returns an error if the database file cannot be opened, the PRAGMA
/// configuration fails, or the schema cannot be created.
pub(crate) fn init_db(path: &str) -> Result<Connection> {
    let conn = Connection::open(path)
        .with_context(|| format!("Failed to open catalog database {}", path))?;

    let journal_mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |r| r.get(0))?;
    if journal_mode != "wal" {
        anyhow::bail!(
            "Failed to switch to WAL mode. Current mode: {}",
            journal_mode
        );
    }

    conn.execute_batch("PRAGMA synchronous = NORMAL;")?;

    conn.set_prepared_statement_cache_capacity(16);

    create_schema(&conn)?;

    Ok(conn)
}

/// Create the database schema.
///
/// Creates the `records` table if it does not already exist. The video id is
/// the primary key; all display fields except `year` are non-null and default
/// to the empty string.
fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        BEGIN;
        CREATE TABLE IF NOT EXISTS records (
            youtube_id  TEXT PRIMARY KEY,
            title       TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            filename    TEXT NOT NULL DEFAULT '',
            year        TEXT
        );
        COMMIT;
    ",
    )
    .context("Failed to create catalog schema")?;

    Ok(())
}

/// Fetches the full catalog in import order.
pub(crate) fn fetch_records(conn: &Connection) -> Result<Vec<Record>> {
    let mut stmt = conn.prepare_cached(
        "SELECT youtube_id, title, description, filename, year
         FROM records
         ORDER BY rowid",
    )?;

    let records = stmt
        .query_map([], Record::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(records)
}

/// Replaces the entire catalog with `records`, in order, in one transaction.
pub(crate) fn replace_records(conn: &mut Connection, records: &[Record]) -> Result<()> {
    let tx = conn.transaction()?;

    tx.execute("DELETE FROM records", [])?;
    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO records (youtube_id, title, description, filename, year)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;

        for record in records {
            stmt.execute(params![
                record.id,
                record.title,
                record.description,
                record.filename,
                record.year,
            ])?;
        }
    }

    tx.commit().context("Failed to commit catalog replacement")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str, year: Option<&str>) -> Record {
        Record {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            filename: String::new(),
            year: year.map(str::to_string),
        }
    }

    fn test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn test_replace_and_fetch_preserves_order() {
        let mut conn = test_db();

        let records = vec![
            record("yt2", "Song B", None),
            record("yt1", "Song A", Some("2004")),
        ];
        replace_records(&mut conn, &records).unwrap();

        let fetched = fetch_records(&conn).unwrap();
        assert_eq!(fetched.len(), 2);
        assert_eq!(fetched[0].id, "yt2");
        assert_eq!(fetched[1].id, "yt1");
        assert_eq!(fetched[1].year.as_deref(), Some("2004"));
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut conn = test_db();

        replace_records(&mut conn, &[record("yt1", "Song A", None)]).unwrap();
        replace_records(&mut conn, &[record("yt9", "Song Z", None)]).unwrap();

        let fetched = fetch_records(&conn).unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].id, "yt9");
    }
}
