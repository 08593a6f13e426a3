use super::{Flow, Shell};
use crate::core::commands::{CommandError, Outcome};
use crate::error::ShellError;
use crate::input::LineSource;
use std::io::Write;

pub(crate) trait CommandHandler {
    fn execute_line(&mut self, line: &str) -> Result<Flow, ShellError>;
}

impl<S: LineSource, W: Write> CommandHandler for Shell<S, W> {
    fn execute_line(&mut self, line: &str) -> Result<Flow, ShellError> {
        let mut tokens = line.split_whitespace();
        let Some(command_name) = tokens.next() else {
            return Ok(Flow::Continue);
        };
        let command_args: Vec<String> = tokens.map(str::to_string).collect();

        let result = self
            .table
            .execute(&mut self.session, command_name, &command_args);

        match result {
            Ok(Outcome::Status(message)) => {
                self.console.success(&message)?;
                if command_name == "cd" {
                    self.source.set_working_dir(self.session.current_dir());
                }
            }
            Ok(Outcome::Print(text)) => self.console.line(&text)?,
            Ok(Outcome::Exit) => return Ok(Flow::Exit),
            Err(e @ CommandError::NotFound(_)) => self.console.notice(&e.to_string())?,
            Err(CommandError::Gateway(e)) => self.console.error(&e.to_string())?,
        }

        Ok(Flow::Continue)
    }
}
