use crate::path::{PathError, PathExpander};
use std::env;
use std::path::{Path, PathBuf};

/// The navigator's working directory.
///
/// Every relative path argument is resolved against `current_dir`. The
/// process working directory is left alone, so a session can be driven
/// without touching global state.
#[derive(Debug, Clone)]
pub struct Session {
    current_dir: PathBuf,
    expander: PathExpander,
}

impl Session {
    /// Starts in the directory the program was launched from.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self::at(env::current_dir()?))
    }

    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self {
            current_dir: dir.into(),
            expander: PathExpander::new(),
        }
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn resolve(&self, arg: &str) -> Result<PathBuf, PathError> {
        self.expander.resolve(&self.current_dir, arg)
    }

    pub(crate) fn set_current_dir(&mut self, dir: PathBuf) {
        self.current_dir = dir;
    }
}
