use super::PathError;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct PathExpander;

impl Default for PathExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    /// Expands a leading `~` or `~/`; every other argument is returned verbatim.
    pub fn expand(&self, path: &str) -> Result<PathBuf, PathError> {
        if self.is_home_path(path) {
            self.expand_tilde(path)
        } else {
            Ok(Path::new(path).to_path_buf())
        }
    }

    /// Expands `path` and anchors it at `base` when it is still relative.
    pub fn resolve(&self, base: &Path, path: &str) -> Result<PathBuf, PathError> {
        let expanded = self.expand(path)?;
        if expanded.is_absolute() {
            Ok(expanded)
        } else {
            Ok(base.join(expanded))
        }
    }

    fn expand_tilde(&self, path: &str) -> Result<PathBuf, PathError> {
        let mut home_path = self.home_dir()?;
        if let Some(rest) = path.strip_prefix("~/") {
            for part in rest.split('/').filter(|part| !part.is_empty()) {
                home_path.push(part);
            }
        }
        Ok(home_path)
    }

    // "~user" is left alone and treated as a plain name
    pub fn is_home_path(&self, path: &str) -> bool {
        path == "~" || path.starts_with("~/")
    }

    pub fn home_dir(&self) -> Result<PathBuf, PathError> {
        dirs::home_dir().ok_or(PathError::HomeDirNotFound)
    }
}
