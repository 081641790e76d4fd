//! Flag file load/store: one read-modify-write cycle per invocation.
//!
//! Writes are update-only (the destination must already exist) and atomic
//! (temp file + rename), so an interrupted process never leaves a torn
//! file. There is no cross-process locking: concurrent invocations are
//! last-writer-wins.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::core::store::FlagStore;
use crate::error::{Error, Result};
use crate::io::codec;

/// Load and decode the flag config into a [`FlagStore`].
pub fn load_flags(path: &Path) -> Result<FlagStore> {
    let raw = fs::read_to_string(path).map_err(|source| Error::ConfigUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let flags = codec::decode(&raw).map_err(|source| Error::MalformedConfig {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), flags = flags.len(), "loaded flag config");
    Ok(FlagStore::new(flags))
}

/// Overwrite the flag config with a full flag snapshot.
///
/// The destination must already exist: this gate updates site configs, it
/// never creates them.
pub fn write_flags(path: &Path, flags: &BTreeMap<String, bool>) -> Result<()> {
    if !path.exists() {
        return Err(Error::ConfigMissing {
            path: path.to_path_buf(),
        });
    }
    let buf = codec::encode(flags).map_err(|source| Error::ConfigUnwritable {
        path: path.to_path_buf(),
        source: io::Error::other(source),
    })?;
    write_atomic(path, &buf)?;
    tracing::debug!(path = %path.display(), flags = flags.len(), "wrote flag config");
    Ok(())
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp_path = path.with_extension("yaml.tmp");
    fs::write(&tmp_path, contents).map_err(|source| Error::ConfigUnwritable {
        path: tmp_path.clone(),
        source,
    })?;
    fs::rename(&tmp_path, path).map_err(|source| Error::ConfigUnwritable {
        path: path.to_path_buf(),
        source,
    })
}
