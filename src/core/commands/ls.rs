use super::{Command, CommandError, Outcome};
use crate::core::gateway::FsGateway;
use crate::core::Session;

/// Lists the session directory. Arguments are ignored.
#[derive(Clone)]
pub struct LsCommand {
    gateway: FsGateway,
}

impl LsCommand {
    pub fn new(gateway: FsGateway) -> Self {
        Self { gateway }
    }
}

impl Command for LsCommand {
    fn execute(&self, session: &mut Session, _args: &[String]) -> Result<Outcome, CommandError> {
        Ok(Outcome::Print(self.gateway.list_dir(session)?))
    }
}
