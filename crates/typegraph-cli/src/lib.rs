//! Typegraph CLI - command-line front end for `typegraph-core`.
//!
//! Loads type catalogs, computes the closure of the requested roots and
//! writes the resulting document as JSON.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - `resolve` and `list` implementations
//! - [`config`] - layered configuration (defaults, file, environment, CLI)
//! - [`error`] - error types with actionable hints
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - spinner, status messages and formatting
//!
//! # Example
//!
//! ```rust
//! use typegraph_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
