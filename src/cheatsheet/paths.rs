//! # Directory Resolution
//!
//! Locates the per-user data and config roots following the XDG base directory
//! convention, with an extra override layer for automated tests.
//!
//! ## Precedence
//!
//! For the data root (the config root is identical with `CONFIG` in place of `DATA`
//! and `.config` in place of `.local/share`):
//!
//! 1. `TEST_XDG_DATA_HOME`, only when `SJB_TOOLS_TEST=1`
//! 2. `XDG_DATA_HOME`
//! 3. `$HOME/.local/share`
//! 4. otherwise [`CsError::Configuration`]
//!
//! Nothing is cached: every call consults the [`Env`] again, so a test may change
//! variables between calls.

use crate::env::{Env, SystemEnv};
use crate::error::{CsError, Result};
use std::path::PathBuf;
use tracing::debug;

pub const ENV_TEST_FLAG: &str = "SJB_TOOLS_TEST";
pub const ENV_DATA_HOME: &str = "XDG_DATA_HOME";
pub const ENV_CONFIG_HOME: &str = "XDG_CONFIG_HOME";
pub const ENV_TEST_DATA_HOME: &str = "TEST_XDG_DATA_HOME";
pub const ENV_TEST_CONFIG_HOME: &str = "TEST_XDG_CONFIG_HOME";
pub const ENV_HOME: &str = "HOME";

/// One family of base directories (data or config).
struct RootKind {
    test_override: &'static str,
    override_var: &'static str,
    home_suffix: &'static [&'static str],
}

const DATA_ROOT: RootKind = RootKind {
    test_override: ENV_TEST_DATA_HOME,
    override_var: ENV_DATA_HOME,
    home_suffix: &[".local", "share"],
};

const CONFIG_ROOT: RootKind = RootKind {
    test_override: ENV_TEST_CONFIG_HOME,
    override_var: ENV_CONFIG_HOME,
    home_suffix: &[".config"],
};

#[derive(Debug, Clone, Default)]
pub struct PathResolver<E: Env = SystemEnv> {
    env: E,
}

impl PathResolver<SystemEnv> {
    /// A resolver reading the real process environment.
    pub fn system() -> Self {
        Self { env: SystemEnv }
    }
}

impl<E: Env> PathResolver<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// True iff the test flag is set to exactly `"1"`.
    pub fn is_test_environment(&self) -> bool {
        self.env.var(ENV_TEST_FLAG).as_deref() == Some("1")
    }

    /// Root under which applications keep user-specific data files.
    pub fn user_data_root(&self) -> Result<PathBuf> {
        self.resolve_root(&DATA_ROOT)
    }

    /// Root under which applications keep user-specific config files.
    pub fn user_config_root(&self) -> Result<PathBuf> {
        self.resolve_root(&CONFIG_ROOT)
    }

    /// `<data root>/<suite>/<app>`, the suite segment omitted when absent or empty.
    pub fn user_app_data_dir(&self, app_name: &str, suite_name: Option<&str>) -> Result<PathBuf> {
        Ok(app_dir(self.user_data_root()?, app_name, suite_name))
    }

    /// `<config root>/<suite>/<app>`, the suite segment omitted when absent or empty.
    pub fn user_app_config_dir(
        &self,
        app_name: &str,
        suite_name: Option<&str>,
    ) -> Result<PathBuf> {
        Ok(app_dir(self.user_config_root()?, app_name, suite_name))
    }

    fn resolve_root(&self, kind: &RootKind) -> Result<PathBuf> {
        if self.is_test_environment() {
            if let Some(dir) = self.env.var(kind.test_override) {
                debug!(var = kind.test_override, %dir, "using test root override");
                return Ok(PathBuf::from(dir));
            }
        }
        if let Some(dir) = self.env.var(kind.override_var) {
            return Ok(PathBuf::from(dir));
        }
        if let Some(home) = self.env.var(ENV_HOME) {
            let mut root = PathBuf::from(home);
            for part in kind.home_suffix {
                root.push(part);
            }
            return Ok(root);
        }

        let mut tried = Vec::with_capacity(3);
        if self.is_test_environment() {
            tried.push(kind.test_override);
        }
        tried.push(kind.override_var);
        tried.push(ENV_HOME);
        Err(CsError::Configuration { tried })
    }
}

fn app_dir(root: PathBuf, app_name: &str, suite_name: Option<&str>) -> PathBuf {
    let mut dir = root;
    if let Some(suite) = suite_name.filter(|s| !s.is_empty()) {
        dir.push(suite);
    }
    dir.push(app_name);
    dir
}
