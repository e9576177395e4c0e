use super::fs::{self as sfs, EntryKind};
use super::{APP_NAME, BACKUP_EXTENSION, DEFAULT_LIST_NAME, LIST_FILE_EXTENSION, SUITE_NAME};
use crate::env::{Env, SystemEnv};
use crate::error::{CsError, Result};
use crate::paths::PathResolver;
use crate::record::RecordCollection;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A handle on one named list file. Holds no list data of its own.
///
/// Two handles with the same name point at the same file; there is no locking
/// between them.
#[derive(Debug, Clone)]
pub struct ListStorage<E: Env = SystemEnv> {
    list_name: String,
    resolver: PathResolver<E>,
}

impl ListStorage<SystemEnv> {
    /// Storage for `name` (or the default list) in the process environment.
    pub fn new(name: Option<&str>) -> Self {
        Self::with_resolver(name, PathResolver::system())
    }

    /// Names of all lists in the process environment's data directory.
    pub fn list_all_names_in_env() -> Result<Vec<String>> {
        Self::list_all_names(&PathResolver::system())
    }
}

impl<E: Env> ListStorage<E> {
    pub fn with_resolver(name: Option<&str>, resolver: PathResolver<E>) -> Self {
        let list_name = name
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_LIST_NAME)
            .to_string();
        Self {
            list_name,
            resolver,
        }
    }

    pub fn list_name(&self) -> &str {
        &self.list_name
    }

    /// The directory every list file lives in.
    pub fn data_dir(resolver: &PathResolver<E>) -> Result<PathBuf> {
        resolver.user_app_data_dir(APP_NAME, Some(SUITE_NAME))
    }

    /// Resolved on every call; environment changes are picked up.
    pub fn list_file_path(&self) -> Result<PathBuf> {
        let dir = Self::data_dir(&self.resolver)?;
        Ok(dir.join(format!("{}{}", self.list_name, LIST_FILE_EXTENSION)))
    }

    pub fn backup_file_path(&self) -> Result<PathBuf> {
        Ok(sfs::backup_path(&self.list_file_path()?, BACKUP_EXTENSION))
    }

    /// Names of every list file in the data directory, extension stripped.
    ///
    /// Only regular files ending in the list extension count. Order is whatever
    /// the directory listing yields. A data directory that does not exist yet
    /// holds no lists, so the result is empty rather than an error.
    pub fn list_all_names(resolver: &PathResolver<E>) -> Result<Vec<String>> {
        let dir = Self::data_dir(resolver)?;
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(dir = %dir.display(), "data directory missing, no lists");
                return Ok(Vec::new());
            }
            Err(e) => return Err(CsError::Io(e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry.map_err(CsError::Io)?.path();
            if !path.is_file() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Some(name) = file_name.strip_suffix(LIST_FILE_EXTENSION) {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    /// Writes `list` to this handle's file, keeping the previous file as the backup.
    ///
    /// Order matters and is not transactional: the directory is created and the
    /// backup taken before `list` is validated, so a validation failure leaves
    /// both in place. The final write replaces the file via a rename.
    pub fn save_list<C: RecordCollection>(&self, list: &C) -> Result<()> {
        let path = self.list_file_path()?;
        if let Some(parent) = path.parent() {
            sfs::ensure_dir(parent)?;
        }

        sfs::backup_file(&path, BACKUP_EXTENSION)?;

        list.validate()?;

        let content = serde_json::to_string_pretty(list).map_err(CsError::Serialization)?;
        sfs::write_atomic(&path, content.as_bytes())?;
        debug!(list = %self.list_name, path = %path.display(), "saved list");
        Ok(())
    }

    /// Reads, decodes and validates this handle's list.
    pub fn load_list<C: RecordCollection>(&self) -> Result<C> {
        let path = self.list_file_path()?;
        self.load_from(&path)
    }

    /// Reads the backup, the list as it was before the last save.
    pub fn load_backup<C: RecordCollection>(&self) -> Result<C> {
        let path = self.backup_file_path()?;
        self.load_from(&path)
    }

    fn load_from<C: RecordCollection>(&self, path: &Path) -> Result<C> {
        match sfs::entry_kind(path)? {
            EntryKind::Missing => {
                return Err(CsError::NoListFile {
                    name: self.list_name.clone(),
                    path: path.to_path_buf(),
                })
            }
            EntryKind::Other => {
                warn!(path = %path.display(), "list path is not a regular file");
                return Err(CsError::WrongFileType(path.to_path_buf()));
            }
            EntryKind::File => {}
        }

        let list: C = sfs::read_document(path)?;
        list.validate()?;
        Ok(list)
    }
}
