use super::{Command, CommandError, Outcome};
use crate::core::Session;

pub const HELP_TEXT: &str = "Available commands:
  ls - List files in current directory
  mkdir <directory_name> - Create a new directory
  cd <directory_name> - Change directory
  touch <file_name> - Create a new file
  read <file_name> - Read a file
  cp <source_file> <destination_file> - Copy a file
  rm <file_or_directory_name> - Delete a file or directory
  help - Display available commands
  exit - Exit the program";

#[derive(Clone)]
pub struct HelpCommand;

impl Default for HelpCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelpCommand {
    fn execute(&self, _session: &mut Session, _args: &[String]) -> Result<Outcome, CommandError> {
        Ok(Outcome::Print(HELP_TEXT.to_string()))
    }
}
