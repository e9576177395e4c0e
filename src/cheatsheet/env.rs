//! # Environment Provider
//!
//! Directory resolution is driven entirely by environment variables. Rather than
//! reading the process environment from deep inside the path logic, the lookup is
//! abstracted behind the [`Env`] trait and handed to [`crate::paths::PathResolver`]
//! at construction time.
//!
//! - [`SystemEnv`]: the real process environment, re-read on every call
//! - [`MapEnv`]: a plain in-memory map, so tests never touch `std::env`
//!
//! A variable that is present with an empty value counts as set.

use std::collections::HashMap;

/// Read-only access to environment variables.
pub trait Env {
    fn var(&self, key: &str) -> Option<String>;

    fn is_set(&self, key: &str) -> bool {
        self.var(key).is_some()
    }
}

/// The process environment. Nothing is cached.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl Env for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-unicode values are treated as unset.
        std::env::var(key).ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.vars.insert(key.to_string(), value.into());
    }

    pub fn remove(&mut self, key: &str) {
        self.vars.remove(key);
    }
}

impl Env for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<E: Env + ?Sized> Env for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
