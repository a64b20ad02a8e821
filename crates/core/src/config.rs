//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into services and
//! request handlers. Nothing reads process-wide environment variables while serving requests.

use crate::constants::{
    DEFAULT_DATA_FILE, DEFAULT_REST_ADDR, DEFAULT_SOURCE_FILE, DEFAULT_STATIC_DIR,
    DEFAULT_TEMPLATE_DIR, INDEX_PAGE_FILENAME, STATIC_SUBDIRS,
};
use crate::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

pub const REST_ADDR_ENV: &str = "NAMASTE_REST_ADDR";
pub const DATA_FILE_ENV: &str = "NAMASTE_DATA_FILE";
pub const SOURCE_FILE_ENV: &str = "NAMASTE_SOURCE_FILE";
pub const TEMPLATE_DIR_ENV: &str = "NAMASTE_TEMPLATE_DIR";
pub const STATIC_DIR_ENV: &str = "NAMASTE_STATIC_DIR";

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    rest_addr: String,
    data_file: PathBuf,
    source_file: PathBuf,
    template_dir: PathBuf,
    static_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(
        rest_addr: String,
        data_file: PathBuf,
        source_file: PathBuf,
        template_dir: PathBuf,
        static_dir: PathBuf,
    ) -> CoreResult<Self> {
        if rest_addr.trim().is_empty() {
            return Err(CoreError::InvalidInput("rest_addr cannot be empty".into()));
        }
        if data_file.as_os_str().is_empty() {
            return Err(CoreError::InvalidInput("data_file cannot be empty".into()));
        }

        Ok(Self {
            rest_addr,
            data_file,
            source_file,
            template_dir,
            static_dir,
        })
    }

    /// Build the configuration from environment lookups.
    ///
    /// `lookup` is called once per setting; `None` or a blank value selects the default. Pass
    /// `|key| std::env::var(key).ok()` in binaries and a closure over a map in tests.
    pub fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self::new(
            value(REST_ADDR_ENV, DEFAULT_REST_ADDR),
            PathBuf::from(value(DATA_FILE_ENV, DEFAULT_DATA_FILE)),
            PathBuf::from(value(SOURCE_FILE_ENV, DEFAULT_SOURCE_FILE)),
            PathBuf::from(value(TEMPLATE_DIR_ENV, DEFAULT_TEMPLATE_DIR)),
            PathBuf::from(value(STATIC_DIR_ENV, DEFAULT_STATIC_DIR)),
        )
    }

    /// Build the configuration from the process environment.
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn rest_addr(&self) -> &str {
        &self.rest_addr
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn source_file(&self) -> &Path {
        &self.source_file
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    pub fn index_page_path(&self) -> PathBuf {
        self.template_dir.join(INDEX_PAGE_FILENAME)
    }

    /// Directories the service expects to exist: the template dir plus the static asset dirs.
    pub fn runtime_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = vec![self.template_dir.clone()];
        dirs.extend(STATIC_SUBDIRS.iter().map(|sub| self.static_dir.join(sub)));
        dirs
    }

    /// Create every runtime directory that does not exist yet.
    ///
    /// Existing directories are left untouched.
    pub fn ensure_runtime_dirs(&self) -> CoreResult<()> {
        for dir in self.runtime_dirs() {
            if dir.is_dir() {
                continue;
            }
            std::fs::create_dir_all(&dir).map_err(|source| CoreError::DirCreation {
                path: dir.clone(),
                source,
            })?;
            tracing::debug!("created directory {}", dir.display());
        }
        Ok(())
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            rest_addr: DEFAULT_REST_ADDR.into(),
            data_file: DEFAULT_DATA_FILE.into(),
            source_file: DEFAULT_SOURCE_FILE.into(),
            template_dir: DEFAULT_TEMPLATE_DIR.into(),
            static_dir: DEFAULT_STATIC_DIR.into(),
        }
    }
}
