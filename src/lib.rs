#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

pub mod cli;

/// The slash commands themselves.
pub mod commands;
pub use commands::Context;

pub mod errors;
pub use errors::{Error, Result};

pub mod framework;

pub mod invocation;
pub use invocation::{handle, Invocation};

pub mod response;

#[cfg(test)]
mod test_support;
