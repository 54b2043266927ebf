//! Key/value sources the loader resolves settings from

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read-only key/value lookup
pub trait EnvSource {
    /// Raw value for `key`, if present
    fn get(&self, key: &str) -> Option<String>;
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// The process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Variables parsed from a dotenv-format file.
///
/// Reading never fails: a missing or unreadable file gives an empty source
/// and malformed lines are skipped.
#[derive(Debug, Clone, Default)]
pub struct EnvFile {
    path: Option<PathBuf>,
    vars: HashMap<String, String>,
}

impl EnvFile {
    /// Best-effort read of `path`
    pub fn read<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "env file not loaded");
                return Self::default();
            }
        };

        let mut vars = HashMap::new();
        for item in iter {
            match item {
                // First definition wins, like loading into the environment
                Ok((key, value)) => {
                    vars.entry(key).or_insert(value);
                }
                Err(e @ dotenvy::Error::LineParse(..)) => {
                    debug!(path = %path.display(), error = %e, "skipping env file line");
                }
                // I/O errors recur on every read (a directory), so stop with what was parsed
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "env file read aborted");
                    break;
                }
            }
        }

        Self {
            path: Some(path.to_path_buf()),
            vars,
        }
    }

    /// Path the variables came from, if the file could be opened
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvSource for EnvFile {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Consults `primary` first and only falls back when the key is absent there.
///
/// A key present in `primary` shadows `fallback` even when its value is empty.
#[derive(Debug, Clone)]
pub struct Layered<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> Layered<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: EnvSource, F: EnvSource> EnvSource for Layered<P, F> {
    fn get(&self, key: &str) -> Option<String> {
        self.primary.get(key).or_else(|| self.fallback.get(key))
    }
}
