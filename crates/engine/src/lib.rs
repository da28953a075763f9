//! PointBuy Engine library.
//!
//! Host adapter around the `pointbuy-domain` attribute engine.
//!
//! ## Structure
//!
//! - `config` - Environment-driven configuration
//! - `infrastructure/` - Port traits and their adapters (draft file, clock, trace observer)
//! - `session/` - Line command parsing and execution

pub mod config;
pub mod infrastructure;
pub mod session;

pub use config::EngineConfig;
pub use session::{Reply, Session, SessionError};
