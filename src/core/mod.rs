pub mod commands;
pub mod gateway;
pub mod session;

pub use session::Session;
