//! # Cheatsheet Storage
//!
//! Persistence for the `cs` cheat sheet tool: where a user's lists live and how
//! they are loaded and saved. The record schema is not this crate's concern;
//! anything implementing [`record::RecordCollection`] can be stored.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Parses arguments, prints lists, maps errors to exit codes│
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - ListStorage: one handle per named list                   │
//! │  - load / save with a one-generation backup                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Paths (paths.rs, env.rs)                                   │
//! │  - XDG data/config roots with test overrides                │
//! │  - Environment injected through the Env trait               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Strategy
//!
//! Nothing in the library reads `std::env` directly except [`env::SystemEnv`].
//! Tests build a [`env::MapEnv`] pointing `HOME` (or `XDG_DATA_HOME`) at a
//! temporary directory and hand it to a [`paths::PathResolver`], so they never
//! touch the real user home and never race on process-wide environment state.
//!
//! ## Module Overview
//!
//! - [`env`]: Environment lookup abstraction
//! - [`paths`]: XDG directory resolution
//! - [`store`]: List files, backups and discovery
//! - [`record`]: What a storable collection must provide
//! - [`model`]: The cheat sheet collection used by the CLI
//! - [`config`]: User configuration file
//! - [`logging`]: tracing subscriber setup for the binary
//! - [`error`]: Error types

pub mod config;
pub mod env;
pub mod error;
pub mod logging;
pub mod model;
pub mod paths;
pub mod record;
pub mod store;
