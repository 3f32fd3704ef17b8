//! Golden-file verification.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::SnapshotError;

/// Environment variable that switches the store into update mode.
pub const UPDATE_ENV: &str = "BOXWOOD_UPDATE_SNAPSHOTS";

/// Environment variable overriding the golden directory.
pub const DIR_ENV: &str = "BOXWOOD_SNAPSHOT_DIR";

/// Where golden files live and whether mismatches overwrite them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotOptions {
    pub dir: PathBuf,
    /// Write the actual output instead of failing on mismatch
    pub update: bool,
}

impl Default for SnapshotOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("snapshots"),
            update: false,
        }
    }
}

impl SnapshotOptions {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            update: false,
        }
    }

    pub fn with_update(mut self, update: bool) -> Self {
        self.update = update;
        self
    }

    /// Read options from `BOXWOOD_SNAPSHOT_DIR` and `BOXWOOD_UPDATE_SNAPSHOTS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let dir = std::env::var_os(DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or(defaults.dir);
        let update = std::env::var(UPDATE_ENV)
            .map(|value| is_truthy(&value))
            .unwrap_or(false);
        Self { dir, update }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "always")
}

/// Compares rendered snapshots against files on disk.
#[derive(Debug, Clone)]
pub struct GoldenStore {
    options: SnapshotOptions,
}

impl GoldenStore {
    pub fn new(options: SnapshotOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SnapshotOptions {
        &self.options
    }

    /// Path of the golden file for `name`.
    pub fn path(&self, name: &str) -> PathBuf {
        self.options.dir.join(format!("{name}.snap"))
    }

    /// Check `actual` against the golden file for `name`.
    ///
    /// In update mode a missing or different golden file is (re)written
    /// instead of reported.
    pub fn verify(&self, name: &str, actual: &str) -> Result<(), SnapshotError> {
        let path = self.path(name);
        match read_golden(&path)? {
            Some(expected) if expected == actual => Ok(()),
            Some(expected) => {
                if self.options.update {
                    warn!("Updating golden snapshot '{}'", name);
                    write_golden(&path, actual)
                } else {
                    Err(SnapshotError::Mismatch {
                        name: name.to_string(),
                        expected,
                        actual: actual.to_string(),
                    })
                }
            }
            None if self.options.update => {
                debug!("Writing new golden snapshot '{}'", name);
                write_golden(&path, actual)
            }
            None => Err(SnapshotError::MissingGolden {
                name: name.to_string(),
            }),
        }
    }
}

fn read_golden(path: &Path) -> Result<Option<String>, SnapshotError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn write_golden(path: &Path, contents: &str) -> Result<(), SnapshotError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}
