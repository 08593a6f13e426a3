use super::{arg, Command, CommandError, Outcome};
use crate::core::gateway::FsGateway;
use crate::core::Session;

#[derive(Clone)]
pub struct ReadCommand {
    gateway: FsGateway,
}

impl ReadCommand {
    pub fn new(gateway: FsGateway) -> Self {
        Self { gateway }
    }
}

impl Command for ReadCommand {
    fn execute(&self, session: &mut Session, args: &[String]) -> Result<Outcome, CommandError> {
        let report = self.gateway.read_file(session, arg(args, 0))?;
        Ok(Outcome::Print(report))
    }
}
