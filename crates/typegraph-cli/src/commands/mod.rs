//! Command implementations for the Typegraph CLI.
//!
//! - [`resolve`] - compute and write a closure document
//! - [`list`] - print catalog type names
//!
//! Each command provides an `execute` function taking its parsed arguments.

pub mod list;
pub mod resolve;

pub use list::execute as list_execute;
pub use resolve::execute as resolve_execute;
