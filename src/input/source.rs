use std::io::BufRead;
use std::path::Path;

use rustyline::{config::Configurer, error::ReadlineError, history::DefaultHistory, Editor};

use super::ShellCompleter;
use crate::core::commands::CommandTable;
use crate::error::ShellError;
use crate::highlight::SyntaxHighlighter;

/// One read from the input stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(String),
    Interrupted,
    Closed,
}

/// Where the loop gets its lines from.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Line, ShellError>;

    /// Whether the source draws the prompt itself. When it does not, the
    /// shell writes the prompt to its own output before reading.
    fn renders_prompt(&self) -> bool {
        false
    }

    fn set_working_dir(&mut self, _dir: &Path) {}
}

/// Interactive line editing with history and tab completion.
pub struct EditorSource {
    editor: Editor<ShellCompleter, DefaultHistory>,
}

impl EditorSource {
    pub fn new(
        table: &CommandTable,
        highlighter: SyntaxHighlighter,
        working_dir: &Path,
    ) -> Result<Self, ShellError> {
        let completer = ShellCompleter::new(table, highlighter, working_dir);
        let mut editor = Editor::<ShellCompleter, DefaultHistory>::new()?;

        editor.set_helper(Some(completer));
        editor.set_auto_add_history(true);

        Ok(Self { editor })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Line, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Line::Text(line)),
            Err(ReadlineError::Interrupted) => Ok(Line::Interrupted),
            Err(ReadlineError::Eof) => Ok(Line::Closed),
            Err(e) => Err(e.into()),
        }
    }

    fn renders_prompt(&self) -> bool {
        true
    }

    fn set_working_dir(&mut self, dir: &Path) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.set_base_dir(dir);
        }
    }
}

/// Plain buffered reader, used for piped input.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Line, ShellError> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(Line::Closed);
        }

        let line = buf.strip_suffix('\n').unwrap_or(buf.as_str());
        let line = line.strip_suffix('\r').unwrap_or(line);
        Ok(Line::Text(line.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reader_source_lines_then_closed() {
        let mut source = ReaderSource::new(Cursor::new("ls\r\nmkdir a\nlast"));

        assert_eq!(source.read_line("> ").unwrap(), Line::Text("ls".into()));
        assert_eq!(source.read_line("> ").unwrap(), Line::Text("mkdir a".into()));
        assert_eq!(source.read_line("> ").unwrap(), Line::Text("last".into()));
        assert_eq!(source.read_line("> ").unwrap(), Line::Closed);
        assert!(!source.renders_prompt());
    }
}
