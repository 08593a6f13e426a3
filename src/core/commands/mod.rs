use std::collections::BTreeMap;

mod cd;
mod cp;
mod exit;
mod help;
mod ls;
mod mkdir;
mod read;
mod rm;
mod touch;

pub use cd::CdCommand;
pub use cp::CpCommand;
pub use exit::ExitCommand;
pub use help::{HelpCommand, HELP_TEXT};
pub use ls::LsCommand;
pub use mkdir::MkdirCommand;
pub use read::ReadCommand;
pub use rm::RmCommand;
pub use touch::TouchCommand;

use super::gateway::{FsGateway, GatewayError};
use super::Session;

pub const UNKNOWN_COMMAND: &str = "Unknown command. Type \"help\" to see available commands.";

#[derive(Debug)]
pub enum CommandError {
    NotFound(String),
    Gateway(GatewayError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::NotFound(_) => write!(f, "{}", UNKNOWN_COMMAND),
            CommandError::Gateway(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<GatewayError> for CommandError {
    fn from(err: GatewayError) -> Self {
        CommandError::Gateway(err)
    }
}

/// What the loop should do once a command has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Confirmation of a completed operation.
    Status(String),
    /// Text shown as-is: listings, file contents, help.
    Print(String),
    Exit,
}

pub trait Command {
    fn execute(&self, session: &mut Session, args: &[String]) -> Result<Outcome, CommandError>;
}

/// Positional argument `index`, absent when the line was too short.
fn arg(args: &[String], index: usize) -> Option<&str> {
    args.get(index).map(String::as_str)
}

#[derive(Clone)]
enum CommandType {
    Ls(LsCommand),
    Mkdir(MkdirCommand),
    Cd(CdCommand),
    Touch(TouchCommand),
    Read(ReadCommand),
    Cp(CpCommand),
    Rm(RmCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command for CommandType {
    fn execute(&self, session: &mut Session, args: &[String]) -> Result<Outcome, CommandError> {
        match self {
            CommandType::Ls(cmd) => cmd.execute(session, args),
            CommandType::Mkdir(cmd) => cmd.execute(session, args),
            CommandType::Cd(cmd) => cmd.execute(session, args),
            CommandType::Touch(cmd) => cmd.execute(session, args),
            CommandType::Read(cmd) => cmd.execute(session, args),
            CommandType::Cp(cmd) => cmd.execute(session, args),
            CommandType::Rm(cmd) => cmd.execute(session, args),
            CommandType::Help(cmd) => cmd.execute(session, args),
            CommandType::Exit(cmd) => cmd.execute(session, args),
        }
    }
}

/// The fixed name-to-command dispatch table. Lookups are exact and
/// case-sensitive.
#[derive(Clone)]
pub struct CommandTable {
    commands: BTreeMap<&'static str, CommandType>,
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandTable {
    pub fn new() -> Self {
        let gateway = FsGateway::new();
        let mut commands = BTreeMap::new();

        commands.insert("ls", CommandType::Ls(LsCommand::new(gateway.clone())));
        commands.insert("mkdir", CommandType::Mkdir(MkdirCommand::new(gateway.clone())));
        commands.insert("cd", CommandType::Cd(CdCommand::new(gateway.clone())));
        commands.insert("touch", CommandType::Touch(TouchCommand::new(gateway.clone())));
        commands.insert("read", CommandType::Read(ReadCommand::new(gateway.clone())));
        commands.insert("cp", CommandType::Cp(CpCommand::new(gateway.clone())));
        commands.insert("rm", CommandType::Rm(RmCommand::new(gateway)));
        commands.insert("help", CommandType::Help(HelpCommand::new()));
        commands.insert("exit", CommandType::Exit(ExitCommand::new()));

        Self { commands }
    }

    pub fn execute(
        &self,
        session: &mut Session,
        command: &str,
        args: &[String],
    ) -> Result<Outcome, CommandError> {
        match self.commands.get(command) {
            Some(cmd) => cmd.execute(session, args),
            None => Err(CommandError::NotFound(command.to_string())),
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scratch::ScratchDir;
    use std::fs;

    fn strings(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_table_names() {
        let table = CommandTable::new();
        let names: Vec<_> = table.names().collect();
        assert_eq!(
            names,
            vec!["cd", "cp", "exit", "help", "ls", "mkdir", "read", "rm", "touch"]
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = CommandTable::new();
        assert!(table.is_builtin("ls"));
        assert!(!table.is_builtin("LS"));
        assert!(!table.is_builtin(""));
    }

    #[test]
    fn test_unknown_command_touches_nothing() {
        let scratch = ScratchDir::new("unknown");
        let mut session = Session::at(scratch.path());
        let table = CommandTable::new();

        let result = table.execute(&mut session, "frobnicate", &strings(&["x"]));
        assert!(matches!(result, Err(CommandError::NotFound(ref name)) if name == "frobnicate"));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Unknown command. Type \"help\" to see available commands."
        );
        assert_eq!(session.current_dir(), scratch.path());
        assert_eq!(fs::read_dir(scratch.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_dispatch_sequence() {
        let scratch = ScratchDir::new("dispatch");
        let mut session = Session::at(scratch.path());
        let table = CommandTable::new();

        fn run(
            table: &CommandTable,
            session: &mut Session,
            line: &[&str],
        ) -> Result<Outcome, CommandError> {
            table.execute(session, line[0], &strings(&line[1..]))
        }

        run(&table, &mut session, &["mkdir", "sub"]).unwrap();
        run(&table, &mut session, &["cd", "sub"]).unwrap();
        run(&table, &mut session, &["touch", "a.txt"]).unwrap();
        fs::write(session.current_dir().join("a.txt"), "hello").unwrap();
        run(&table, &mut session, &["cp", "a.txt", "b.txt"]).unwrap();

        assert_eq!(
            run(&table, &mut session, &["read", "b.txt"]).unwrap(),
            Outcome::Print("Contents of 'b.txt':\nhello".to_string())
        );
        assert_eq!(
            run(&table, &mut session, &["ls"]).unwrap(),
            Outcome::Print("Files in current directory:\na.txt\nb.txt".to_string())
        );

        run(&table, &mut session, &["cd", ".."]).unwrap();
        assert_eq!(
            run(&table, &mut session, &["rm", "sub"]).unwrap(),
            Outcome::Status("Directory 'sub' deleted successfully.".to_string())
        );
        assert!(!scratch.path().join("sub").exists());
    }

    #[test]
    fn test_missing_argument_reported() {
        let scratch = ScratchDir::new("dispatch-missing");
        let mut session = Session::at(scratch.path());
        let table = CommandTable::new();

        for name in ["mkdir", "cd", "touch", "read", "cp", "rm"] {
            let result = table.execute(&mut session, name, &[]);
            assert!(matches!(result, Err(CommandError::Gateway(_))), "{}", name);
        }
    }

    #[test]
    fn test_help_and_exit() {
        let mut session = Session::at(std::env::temp_dir());
        let table = CommandTable::new();

        assert_eq!(
            table.execute(&mut session, "help", &[]).unwrap(),
            Outcome::Print(HELP_TEXT.to_string())
        );
        assert_eq!(table.execute(&mut session, "exit", &[]).unwrap(), Outcome::Exit);
    }
}
