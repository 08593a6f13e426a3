use super::{Command, CommandError, Outcome};
use crate::core::Session;

/// Asks the loop to shut down; the farewell and process exit happen there.
#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _session: &mut Session, _args: &[String]) -> Result<Outcome, CommandError> {
        Ok(Outcome::Exit)
    }
}
