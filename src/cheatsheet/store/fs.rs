//! Filesystem primitives used by [`super::ListStorage`].

use crate::error::{CsError, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// What, if anything, is sitting at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Missing,
    File,
    Other,
}

pub fn entry_kind(path: &Path) -> Result<EntryKind> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(EntryKind::File),
        Ok(_) => Ok(EntryKind::Other),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(EntryKind::Missing),
        Err(e) => Err(CsError::Io(e)),
    }
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        debug!(dir = %path.display(), "creating directory");
        fs::create_dir_all(path).map_err(CsError::Io)?;
    }
    Ok(())
}

/// Path of the backup for `path`: same stem, `ext` replacing the extension.
pub fn backup_path(path: &Path, ext: &str) -> PathBuf {
    path.with_extension(ext.trim_start_matches('.'))
}

/// Copies `path` over its backup location. Returns whether a backup was taken;
/// a missing source is not an error.
pub fn backup_file(path: &Path, ext: &str) -> Result<bool> {
    if entry_kind(path)? != EntryKind::File {
        return Ok(false);
    }
    let backup = backup_path(path, ext);
    fs::copy(path, &backup).map_err(CsError::Io)?;
    debug!(from = %path.display(), to = %backup.display(), "backed up list file");
    Ok(true)
}

/// Writes `content` to a temporary file beside `path`, then renames it into place.
///
/// The replaced file keeps its permissions. A new file gets the same mode a
/// plain create would (0666 less the umask), not the 0600 of a temp file.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let existing = match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Some(meta.permissions()),
        _ => None,
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".cs-").suffix(".tmp");
    if existing.is_none() {
        if let Some(perms) = new_file_permissions() {
            builder.permissions(perms);
        }
    }
    let mut tmp = builder.tempfile_in(dir).map_err(CsError::Io)?;

    if let Some(perms) = existing {
        tmp.as_file().set_permissions(perms).map_err(CsError::Io)?;
    }
    tmp.write_all(content).map_err(CsError::Io)?;
    tmp.as_file().sync_all().map_err(CsError::Io)?;
    tmp.persist(path).map_err(|e| CsError::Io(e.error))?;
    Ok(())
}

#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o666))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}

/// Reads a JSON document and decodes it into `T`.
///
/// Invalid JSON is [`CsError::Parse`]; valid JSON of the wrong shape is
/// [`CsError::Malformed`].
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(CsError::Io)?;
    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|source| CsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_value(value).map_err(|source| CsError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}
