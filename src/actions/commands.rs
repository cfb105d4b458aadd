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

//! Asynchronous application command processing.
//!
//! This module implements the command pattern used to offload catalog I/O
//! (database reads and JSON imports) from the main UI thread. It provides a
//! dedicated worker loop that translates [`AppCommand`] requests into catalog
//! operations and broadcasts the results back to the application via
//! [`AppEvent`]s.

use anyhow::Result;
use rusqlite::Connection;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::{
    actions::events::AppEvent,
    config::AppConfig,
    db::{self, import},
    model::Record,
};

const DATABASE_FILE: &str = "catalog.db";

#[derive(Debug)]
pub(crate) enum AppCommand {
    /// Fetch the catalog from the database. An empty database is populated
    /// from the configured catalog file first, when one is set.
    LoadCatalog,

    /// Re-import the configured catalog file, replacing the database
    /// contents wholesale.
    ImportCatalog,
}

/// Spawns a background thread to process application commands.
///
/// This worker thread initializes its own database connection and enters
/// a blocking loop, listening for incoming [`AppCommand`]s.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `command_rx` - The receiving end of the command channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_command_worker(
    config: &AppConfig,
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        let mut conn = db::init_db(DATABASE_FILE).expect("Failed to initialise database");

        while let Ok(request) = command_rx.recv() {
            if let Err(e) = handle_command(&config, &mut conn, request, &event_tx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Orchestrates the execution of a single command.
///
/// This function implements the logic for each command and sends the result
/// back through the application event channel.
fn handle_command(
    config: &AppConfig,
    conn: &mut Connection,
    command: AppCommand,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    match command {
        AppCommand::LoadCatalog => {
            let mut records = db::fetch_records(conn)?;

            if records.is_empty() {
                if let Some(path) = &config.catalog_file {
                    records = import_catalog(conn, path)?;
                    event_tx.send(AppEvent::CatalogImported(records.len()))?;
                }
            }

            event_tx.send(AppEvent::CatalogLoaded(records))?;
        }

        AppCommand::ImportCatalog => match &config.catalog_file {
            Some(path) => {
                let records = import_catalog(conn, path)?;
                event_tx.send(AppEvent::CatalogImported(records.len()))?;
                event_tx.send(AppEvent::CatalogLoaded(records))?;
            }

            None => anyhow::bail!("No catalog file configured"),
        },
    }

    Ok(())
}

/// Imports the catalog JSON at `path` into the database and returns the
/// resulting record list, in import order.
fn import_catalog(conn: &mut Connection, path: &str) -> Result<Vec<Record>> {
    let records = import::load_catalog_file(path)?;
    db::replace_records(conn, &records)?;
    db::fetch_records(conn)
}
