use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;
use super::MemoryStorage;
use crate::error::{Result, SubwayError};

/// Snapshot format version written in the header
pub const CURRENT_SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Snapshot {
    saved_at: DateTime<Utc>,
    storage: MemoryStorage,
}

/// Serialize a store to bytes with version header
///
/// # Errors
/// Returns an error if `MessagePack` serialization fails
pub fn serialize_snapshot(storage: &MemoryStorage) -> Result<Vec<u8>> {
    let snapshot = Snapshot {
        saved_at: Utc::now(),
        storage: storage.clone(),
    };
    let body = rmp_serde::to_vec_named(&snapshot)
        .map_err(|e| SubwayError::Storage(format!("Failed to serialize snapshot: {e}")))?;

    // [4 bytes u32 version][MessagePack data]
    let mut bytes = Vec::with_capacity(4 + body.len());
    bytes.extend_from_slice(&CURRENT_SNAPSHOT_VERSION.to_le_bytes());
    bytes.extend_from_slice(&body);

    Ok(bytes)
}

/// Deserialize a store from bytes with version header validation
///
/// # Errors
/// Returns an error if the data is truncated, the version is unsupported, or
/// deserialization fails
pub fn deserialize_snapshot(bytes: &[u8]) -> Result<MemoryStorage> {
    let Some((header, body)) = bytes.split_first_chunk::<4>() else {
        return Err(rejected("Invalid snapshot: too small".to_string()));
    };

    let version = u32::from_le_bytes(*header);
    if version != CURRENT_SNAPSHOT_VERSION {
        return Err(rejected(format!("Unsupported snapshot version: {version}")));
    }

    let snapshot: Snapshot =
        rmp_serde::from_slice(body).map_err(|e| rejected(format!("Failed to parse snapshot: {e}")))?;
    info!("loaded snapshot saved at {}", snapshot.saved_at.to_rfc3339());

    Ok(snapshot.storage)
}

fn rejected(message: String) -> SubwayError {
    warn!("rejected snapshot: {message}");
    SubwayError::Storage(message)
}

/// Write a snapshot of the store to `path`
///
/// The bytes go to a sibling `.tmp` file first, which is then renamed over
/// `path`, so a failed write leaves the previous snapshot in place.
///
/// # Errors
/// Returns an error if serialization, the write or the rename fails
pub fn save_snapshot(storage: &MemoryStorage, path: &Path) -> Result<()> {
    let bytes = serialize_snapshot(storage)?;
    let tmp_path = path.with_extension("tmp");

    std::fs::write(&tmp_path, bytes)
        .map_err(|e| SubwayError::Storage(format!("Failed to write {}: {e}", tmp_path.display())))?;
    std::fs::rename(&tmp_path, path)
        .map_err(|e| SubwayError::Storage(format!("Failed to replace {}: {e}", path.display())))
}

/// Read the snapshot at `path`, or start empty if the file does not exist yet
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed
pub fn load_snapshot(path: &Path) -> Result<MemoryStorage> {
    match std::fs::read(path) {
        Ok(bytes) => deserialize_snapshot(&bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("no snapshot at {}, starting empty", path.display());
            Ok(MemoryStorage::new())
        }
        Err(e) => Err(SubwayError::Storage(format!("Failed to read {}: {e}", path.display()))),
    }
}
