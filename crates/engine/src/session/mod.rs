//! Command session - the text front end over the attribute engine.

pub mod command;
pub mod runner;

pub use command::{Command, CommandError, HELP};
pub use runner::{Reply, Session, SessionError};
