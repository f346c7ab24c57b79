//! Configuration loading and schema definitions
//!
//! Settings for the binary and the telemetry layer, read from TOML.

mod loader;
mod schema;

pub use loader::{Config, CONFIG_FILE_NAME};
pub use schema::*;
