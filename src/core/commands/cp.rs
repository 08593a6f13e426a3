use super::{arg, Command, CommandError, Outcome};
use crate::core::gateway::FsGateway;
use crate::core::Session;

#[derive(Clone)]
pub struct CpCommand {
    gateway: FsGateway,
}

impl CpCommand {
    pub fn new(gateway: FsGateway) -> Self {
        Self { gateway }
    }
}

impl Command for CpCommand {
    fn execute(&self, session: &mut Session, args: &[String]) -> Result<Outcome, CommandError> {
        let report = self
            .gateway
            .copy_file(session, arg(args, 0), arg(args, 1))?;
        Ok(Outcome::Status(report))
    }
}
