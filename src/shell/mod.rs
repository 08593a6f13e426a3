use std::io::Write;

mod console;
mod executor;

pub use console::Console;

use crate::{
    core::{
        commands::{CommandTable, HELP_TEXT},
        Session,
    },
    error::ShellError,
    input::{Line, LineSource},
};

use executor::CommandHandler;

pub const PROMPT: &str = "> ";
pub const FAREWELL: &str = "Exited program";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Exit,
}

pub fn banner() -> String {
    format!(
        "FILE NAV {}\nInteractive filesystem navigator",
        env!("CARGO_PKG_VERSION")
    )
}

/// The read-dispatch-print loop.
///
/// Each line is dispatched and its outcome printed before the next prompt,
/// so output never interleaves. The loop ends on `exit` or when the input
/// closes (end of input or Ctrl-C); all of these go through
/// [`Shell::shutdown`].
pub struct Shell<S, W> {
    pub(crate) source: S,
    pub(crate) console: Console<W>,
    pub(crate) session: Session,
    pub(crate) table: CommandTable,
}

impl<S: LineSource, W: Write> Shell<S, W> {
    pub fn new(source: S, console: Console<W>, session: Session) -> Self {
        Shell {
            source,
            console,
            session,
            table: CommandTable::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        self.console.line(&banner())?;
        self.console.line(HELP_TEXT)?;
        self.source.set_working_dir(self.session.current_dir());

        loop {
            if !self.source.renders_prompt() {
                self.console.prompt(PROMPT)?;
            }

            match self.source.read_line(PROMPT) {
                Ok(Line::Text(line)) => {
                    if self.execute_line(&line)? == Flow::Exit {
                        break;
                    }
                }
                Ok(Line::Interrupted) | Ok(Line::Closed) => break,
                Err(e) => {
                    self.console.error(&format!("Error: {}", e))?;
                    break;
                }
            }
        }

        self.shutdown()
    }

    pub fn shutdown(&mut self) -> Result<(), ShellError> {
        self.console.line(FAREWELL)?;
        Ok(())
    }

    pub fn into_console(self) -> Console<W> {
        self.console
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scratch::ScratchDir;
    use crate::input::ReaderSource;
    use std::collections::VecDeque;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;

    /// Replays canned reads, then reports the stream closed.
    struct ScriptedSource {
        lines: VecDeque<Line>,
    }

    impl LineSource for ScriptedSource {
        fn read_line(&mut self, _prompt: &str) -> Result<Line, ShellError> {
            Ok(self.lines.pop_front().unwrap_or(Line::Closed))
        }
    }

    fn run_source<S: LineSource>(dir: &Path, source: S) -> (String, Session) {
        let console = Console::plain(Vec::new());
        let mut shell = Shell::new(source, console, Session::at(dir));

        shell.run().unwrap();
        let session = shell.session().clone();
        let output = String::from_utf8(shell.into_console().into_inner()).unwrap();
        (output, session)
    }

    /// Runs `script` and returns everything printed after the startup text.
    fn run_script(dir: &Path, script: &str) -> (String, Session) {
        let source = ReaderSource::new(Cursor::new(script.to_string()));
        let (output, session) = run_source(dir, source);

        let header = format!("{}\n{}\n", banner(), HELP_TEXT);
        let body = output.strip_prefix(&header).unwrap().to_string();
        (body, session)
    }

    #[test]
    fn test_startup_banner_and_help() {
        let scratch = ScratchDir::new("shell-banner");
        let source = ReaderSource::new(Cursor::new(String::new()));
        let (output, _) = run_source(scratch.path(), source);

        let expected = format!("{}\n{}\n> {}\n", banner(), HELP_TEXT, FAREWELL);
        assert_eq!(output, expected);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let scratch = ScratchDir::new("shell-scenario");
        let script = "mkdir sub\ncd sub\ntouch note.txt\nread note.txt\ncd ..\nrm sub\n";
        let (output, session) = run_script(scratch.path(), script);

        let expected = "\
> Directory 'sub' created successfully.
> Changed directory to 'sub'.
> File 'note.txt' created successfully.
> Contents of 'note.txt':

> Changed directory to '..'.
> Directory 'sub' deleted successfully.
> Exited program
";
        assert_eq!(output, expected);
        assert_eq!(session.current_dir(), scratch.path());
        assert!(!scratch.path().join("sub").exists());
    }

    #[test]
    fn test_exit_stops_reading() {
        let scratch = ScratchDir::new("shell-exit");
        let (output, _) = run_script(scratch.path(), "exit\nmkdir late\n");

        assert_eq!(output, "> Exited program\n");
        assert!(!scratch.path().join("late").exists());
    }

    #[test]
    fn test_interrupt_shuts_down_like_end_of_input() {
        let scratch = ScratchDir::new("shell-interrupt");
        let source = ScriptedSource {
            lines: VecDeque::from(vec![
                Line::Text("mkdir before".to_string()),
                Line::Interrupted,
                Line::Text("mkdir after".to_string()),
            ]),
        };
        let (output, _) = run_source(scratch.path(), source);

        assert!(output.ends_with(
            "> Directory 'before' created successfully.\n> Exited program\n"
        ));
        assert!(scratch.path().join("before").exists());
        assert!(!scratch.path().join("after").exists());
    }

    #[test]
    fn test_errors_do_not_end_loop() {
        let scratch = ScratchDir::new("shell-errors");
        let script = "cd missing\nfrobnicate\nmkdir\nread ghost\n\n   \nls\n";
        let (output, session) = run_script(scratch.path(), script);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "> Directory 'missing' does not exist.");
        assert_eq!(
            lines[1],
            "> Unknown command. Type \"help\" to see available commands."
        );
        assert_eq!(lines[2], "> Error creating directory: missing <directory_name>");
        assert!(lines[3].starts_with("> Error reading file:"));
        assert_eq!(lines[4], "> > > Files in current directory:");
        assert_eq!(lines[5], "> Exited program");
        assert_eq!(session.current_dir(), scratch.path());
    }

    #[test]
    fn test_whitespace_runs_split_arguments() {
        let scratch = ScratchDir::new("shell-split");
        fs::write(scratch.path().join("a"), "payload").unwrap();
        let (output, _) = run_script(scratch.path(), "  cp \t a    b  \nread b\n");

        assert!(output.contains("File 'a' copied to 'b' successfully."));
        assert!(output.contains("Contents of 'b':\npayload\n"));
    }

    #[test]
    fn test_help_reprinted() {
        let scratch = ScratchDir::new("shell-help");
        let (output, _) = run_script(scratch.path(), "help\n");

        assert_eq!(output, format!("> {}\n> {}\n", HELP_TEXT, FAREWELL));
    }
}
