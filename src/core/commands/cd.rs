use super::{arg, Command, CommandError, Outcome};
use crate::core::gateway::FsGateway;
use crate::core::Session;

/// Moves the session to another directory. Unlike a login shell there is
/// no implicit home target: a bare `cd` is a missing-argument error.
#[derive(Clone)]
pub struct CdCommand {
    gateway: FsGateway,
}

impl CdCommand {
    pub fn new(gateway: FsGateway) -> Self {
        Self { gateway }
    }
}

impl Command for CdCommand {
    fn execute(&self, session: &mut Session, args: &[String]) -> Result<Outcome, CommandError> {
        let report = self.gateway.change_dir(session, arg(args, 0))?;
        Ok(Outcome::Status(report))
    }
}
