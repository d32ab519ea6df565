//! Command system registered with the host.
//!
//! This module provides:
//! - Command descriptors with stable ids
//! - Dispatch classification (global / editor / conditional)
//! - The text mutations behind each editor command

pub mod editing;
mod registry;

pub use registry::{Command, CommandAction, CommandKind, CommandRegistry};
