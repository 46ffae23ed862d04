//! sq-cli library
//!
//! Argument definitions and the command runner, shared by the `sq` binary
//! and the integration tests.

pub mod cli;
pub(crate) mod commands;
pub mod error;
pub mod logger;
pub(crate) mod profile_commands;
pub mod runner;


pub use cli::Cli;
pub use error::{CliError, Result as CliErrorResult};
pub use runner::{Reply, execute, run};
