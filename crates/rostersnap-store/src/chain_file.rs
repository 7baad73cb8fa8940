//! JSON persistence for snapshot chains and live roster documents.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

use rostersnap_core::diff::fix_chain;
use rostersnap_core::model::LiveRoster;
use rostersnap_core::{log_op_end, log_op_error, log_op_start, RosterSnapshotChain};
use serde::de::DeserializeOwned;

use crate::atomic::atomic_write;
use crate::errors::{io_error, json_error, Result};

/// Load a chain file
///
/// A missing file is an empty chain (first run). The loaded chain is passed
/// through `fix_chain`, so negative counts written by older hosts are clamped.
///
/// # Errors
///
/// - `Io` if the file exists but cannot be read
/// - `Serialization` if the file is not a valid chain document
pub fn load_chain(path: &Path) -> Result<RosterSnapshotChain> {
    log_op_start!("load_chain", path = %path.display());
    let start = Instant::now();

    let result = load_chain_impl(path);
    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(chain) => {
            log_op_end!("load_chain", duration_ms = elapsed, chain_len = chain.len());
        }
        Err(e) => {
            log_op_error!("load_chain", e.clone(), duration_ms = elapsed);
        }
    }
    result
}

fn load_chain_impl(path: &Path) -> Result<RosterSnapshotChain> {
    let Some(chain) = read_json_if_exists::<RosterSnapshotChain>("load_chain", path)? else {
        tracing::debug!(path = %path.display(), "no chain file; starting empty");
        return Ok(RosterSnapshotChain::new());
    };
    Ok(fix_chain(chain))
}

/// Save a chain file as pretty-printed JSON, atomically
///
/// # Errors
///
/// - `Serialization` if the chain cannot be encoded
/// - `Io` if the file cannot be written
pub fn save_chain(path: &Path, chain: &RosterSnapshotChain) -> Result<()> {
    log_op_start!("save_chain", path = %path.display(), chain_len = chain.len());
    let start = Instant::now();

    let result = serde_json::to_vec_pretty(chain)
        .map_err(|e| json_error("save_chain", path, e))
        .and_then(|bytes| atomic_write(path, &bytes));

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(()) => {
            log_op_end!("save_chain", duration_ms = elapsed);
        }
        Err(e) => {
            log_op_error!("save_chain", e.clone(), duration_ms = elapsed);
        }
    }
    result
}

/// Load a live roster document exported by the host
///
/// # Errors
///
/// - `Io` if the file is missing or unreadable
/// - `Serialization` if it is not a valid roster document
pub fn load_live_roster(path: &Path) -> Result<LiveRoster> {
    let bytes = fs::read(path).map_err(|e| io_error("load_live_roster", path, e))?;
    let roster: LiveRoster =
        serde_json::from_slice(&bytes).map_err(|e| json_error("load_live_roster", path, e))?;
    tracing::debug!(
        path = %path.display(),
        characters = roster.characters.len(),
        vehicles = roster.vehicles.len(),
        "loaded live roster"
    );
    Ok(roster)
}

fn read_json_if_exists<T: DeserializeOwned>(op: &str, path: &Path) -> Result<Option<T>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(io_error(op, path, e)),
    };
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| json_error(op, path, e))
}
