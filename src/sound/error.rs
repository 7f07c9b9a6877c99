//! Compilation error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a compilation pass.
///
/// A failed pass publishes nothing: callers never see a partial registry.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("sound directory `{}` is not readable", .0.display())]
    Directory(PathBuf, #[source] io::Error),

    #[error("sound directory `{}` is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to scan sound directory `{}`", .0.display())]
    Walk(PathBuf, #[source] jwalk::Error),

    #[error("failed to read sound file `{}`", .0.display())]
    File(PathBuf, #[source] io::Error),
}
