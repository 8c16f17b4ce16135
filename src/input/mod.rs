//! Token sources and sinks outside the process: files, stdin, the clipboard.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No token found in {0}")]
    EmptyInput(String),
}

pub mod clipboard;
pub mod file;
pub mod stdin;

pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
