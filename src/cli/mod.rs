//! Command-line interface module.

mod args;
pub mod build;
pub mod ids;
pub mod serve;

pub use args::{Cli, Commands, CompileArgs};
