use super::{arg, Command, CommandError, Outcome};
use crate::core::gateway::FsGateway;
use crate::core::Session;

#[derive(Clone)]
pub struct MkdirCommand {
    gateway: FsGateway,
}

impl MkdirCommand {
    pub fn new(gateway: FsGateway) -> Self {
        Self { gateway }
    }
}

impl Command for MkdirCommand {
    fn execute(&self, session: &mut Session, args: &[String]) -> Result<Outcome, CommandError> {
        let report = self.gateway.create_dir(session, arg(args, 0))?;
        Ok(Outcome::Status(report))
    }
}
