use super::{arg, Command, CommandError, Outcome};
use crate::core::gateway::FsGateway;
use crate::core::Session;

#[derive(Clone)]
pub struct TouchCommand {
    gateway: FsGateway,
}

impl TouchCommand {
    pub fn new(gateway: FsGateway) -> Self {
        Self { gateway }
    }
}

impl Command for TouchCommand {
    fn execute(&self, session: &mut Session, args: &[String]) -> Result<Outcome, CommandError> {
        let report = self.gateway.create_file(session, arg(args, 0))?;
        Ok(Outcome::Status(report))
    }
}
