// Utility module for configuration, logging and error handling

mod config;
mod error;
mod logging;

pub use config::*;
pub use error::*;
pub use logging::*;
