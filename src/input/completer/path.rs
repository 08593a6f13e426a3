use std::{
    fs,
    path::{Path, PathBuf},
};

use rustyline::completion::Pair;

/// Completes file and directory names relative to the session directory
/// rather than the process working directory.
#[derive(Clone)]
pub struct PathCompleter {
    base_dir: PathBuf,
}

impl PathCompleter {
    pub fn new(base_dir: &Path) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
        }
    }

    pub fn set_base_dir(&mut self, dir: &Path) {
        self.base_dir = dir.to_path_buf();
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (typed_dir, file_prefix) = self.parse_path_input(incomplete);
        let dir_to_search = match typed_dir {
            Some(dir) => self.base_dir.join(dir),
            None => self.base_dir.clone(),
        };

        self.get_path_matches(&dir_to_search, typed_dir, &file_prefix)
    }

    /// Splits the typed text into the directory part (as typed) and the
    /// name prefix being completed.
    fn parse_path_input<'a>(&self, incomplete: &'a str) -> (Option<&'a str>, String) {
        match incomplete.rfind('/') {
            Some(pos) => (
                Some(&incomplete[..=pos]),
                incomplete[pos + 1..].to_string(),
            ),
            None => (None, incomplete.to_string()),
        }
    }

    fn get_path_matches(
        &self,
        dir_to_search: &Path,
        typed_dir: Option<&str>,
        file_prefix: &str,
    ) -> Vec<Pair> {
        let mut matches = Vec::new();

        if let Ok(entries) = fs::read_dir(dir_to_search) {
            for entry in entries.filter_map(Result::ok) {
                if let Some(name) = entry.file_name().to_str() {
                    if name.starts_with(file_prefix) {
                        matches.push(self.create_completion_pair(name, &entry.path(), typed_dir));
                    }
                }
            }
        }

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }

    fn create_completion_pair(&self, name: &str, path: &Path, typed_dir: Option<&str>) -> Pair {
        let relative_path = format!("{}{}", typed_dir.unwrap_or(""), name);

        if path.is_dir() {
            Pair {
                display: format!("{}/", relative_path),
                replacement: format!("{}/", relative_path),
            }
        } else {
            Pair {
                display: relative_path.clone(),
                replacement: format!("{} ", relative_path),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scratch::ScratchDir;

    #[test]
    fn test_complete_relative_to_base() {
        let scratch = ScratchDir::new("complete");
        fs::create_dir(scratch.path().join("docs")).unwrap();
        fs::write(scratch.path().join("draft.txt"), "").unwrap();
        fs::write(scratch.path().join("notes.txt"), "").unwrap();
        let completer = PathCompleter::new(scratch.path());

        let matches = completer.complete_path("d");
        let replacements: Vec<_> = matches.iter().map(|p| p.replacement.as_str()).collect();
        assert_eq!(replacements, vec!["docs/", "draft.txt "]);
    }

    #[test]
    fn test_complete_inside_subdir() {
        let scratch = ScratchDir::new("complete-sub");
        fs::create_dir(scratch.path().join("docs")).unwrap();
        fs::write(scratch.path().join("docs").join("readme.md"), "").unwrap();
        let mut completer = PathCompleter::new(Path::new("/nonexistent"));
        completer.set_base_dir(scratch.path());

        let matches = completer.complete_path("docs/re");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].replacement, "docs/readme.md ");
    }
}
