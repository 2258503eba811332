#![forbid(unsafe_code)]

pub mod cli;
pub mod error;
pub mod host;
pub mod logging;
pub mod policy;
pub mod script;

pub use cli::run_from_env;
pub use error::{DemoError, Result};
