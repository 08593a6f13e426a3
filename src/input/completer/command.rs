use rustyline::completion::Pair;

use crate::core::commands::CommandTable;

#[derive(Clone)]
pub struct CommandCompleter {
    commands: Vec<&'static str>,
}

impl CommandCompleter {
    pub fn new(table: &CommandTable) -> Self {
        Self {
            commands: table.names().collect(),
        }
    }

    pub fn is_known(&self, word: &str) -> bool {
        self.commands.contains(&word)
    }

    pub fn complete_command(&self, line: &str) -> Vec<Pair> {
        let input = line.trim();

        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(input))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: format!("{} ", cmd),
            })
            .collect()
    }
}
