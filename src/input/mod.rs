mod completer;
mod source;

pub use completer::ShellCompleter;
pub use source::{EditorSource, Line, LineSource, ReaderSource};
