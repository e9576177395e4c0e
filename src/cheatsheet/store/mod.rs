//! # Storage Layer
//!
//! Each cheat sheet list is one JSON document on disk, addressed by name through
//! a [`ListStorage`] handle.
//!
//! ## Storage Format
//!
//! ```text
//! $XDG_DATA_HOME/sjb/cheatsheet/      (default ~/.local/share/sjb/cheatsheet/)
//! ├── cheatsheet.json     # the default list
//! ├── work.json           # a named list
//! └── work.backup         # work.json as it was before its last save
//! ```
//!
//! The directory is created on the first save. Every save that overwrites an
//! existing list first copies it to the `.backup` file, replacing the previous
//! backup; only one generation is kept.
//!
//! ## Failure Modes
//!
//! Loading distinguishes a list that does not exist ([`CsError::NoListFile`],
//! usually "start a new list") from one that exists but cannot be used: something
//! other than a file at the path ([`CsError::WrongFileType`]), invalid JSON
//! ([`CsError::Parse`]), JSON of the wrong shape ([`CsError::Malformed`]) or
//! content the collection rejects ([`CsError::Validation`]).
//!
//! There is no locking. Concurrent saves to the same list race and the last
//! writer wins.
//!
//! [`CsError::NoListFile`]: crate::error::CsError::NoListFile
//! [`CsError::WrongFileType`]: crate::error::CsError::WrongFileType
//! [`CsError::Parse`]: crate::error::CsError::Parse
//! [`CsError::Malformed`]: crate::error::CsError::Malformed
//! [`CsError::Validation`]: crate::error::CsError::Validation

pub mod fs;
mod list;

pub use list::ListStorage;

pub const SUITE_NAME: &str = "sjb";
pub const APP_NAME: &str = "cheatsheet";
pub const DEFAULT_LIST_NAME: &str = "cheatsheet";
pub const LIST_FILE_EXTENSION: &str = ".json";
pub const BACKUP_EXTENSION: &str = ".backup";
