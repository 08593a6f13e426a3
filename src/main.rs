use filenav::core::{commands::CommandTable, Session};
use filenav::highlight::SyntaxHighlighter;
use filenav::input::{EditorSource, ReaderSource};
use filenav::shell::{Console, Shell};
use std::io::{self, IsTerminal};

// Command-line arguments are ignored; the program takes no options.
fn main() -> Result<(), filenav::error::ShellError> {
    let highlighter = if io::stdout().is_terminal() {
        SyntaxHighlighter::new()
    } else {
        SyntaxHighlighter::plain()
    };

    let session = Session::new()?;
    let console = Console::new(io::stdout(), highlighter);

    if io::stdin().is_terminal() {
        let source = EditorSource::new(&CommandTable::new(), highlighter, session.current_dir())?;
        Shell::new(source, console, session).run()
    } else {
        let source = ReaderSource::new(io::stdin().lock());
        Shell::new(source, console, session).run()
    }
}
