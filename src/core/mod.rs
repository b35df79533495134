pub mod config;
pub mod error;
pub mod types;

pub use config::{config, set_config, MatchConfig};
pub use error::{RendezvousError, Result};
