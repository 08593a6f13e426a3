use super::{arg, Command, CommandError, Outcome};
use crate::core::gateway::FsGateway;
use crate::core::Session;

#[derive(Clone)]
pub struct RmCommand {
    gateway: FsGateway,
}

impl RmCommand {
    pub fn new(gateway: FsGateway) -> Self {
        Self { gateway }
    }
}

impl Command for RmCommand {
    fn execute(&self, session: &mut Session, args: &[String]) -> Result<Outcome, CommandError> {
        let report = self.gateway.delete(session, arg(args, 0))?;
        Ok(Outcome::Status(report))
    }
}
