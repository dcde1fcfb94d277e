use std::path::PathBuf;
use thiserror::Error;

use crate::session::SessionError;

/// Errors surfaced by the structure loader.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("format must be 'pdb' or 'cif', got '{0}'")]
    InvalidFormat(String),

    #[error("could not infer format from filename: {0}")]
    UnknownFormat(String),

    #[error("not a file or directory: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Session(#[from] SessionError),
}
