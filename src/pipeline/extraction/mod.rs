pub mod text_only;
pub mod types;

pub use text_only::*;
pub use types::*;

use thiserror::Error;

/// Total failure of the document text source.
///
/// This is the one extraction-side condition that reaches the caller —
/// per-line noise is handled inside the engine, but an unreadable or
/// unparseable document cannot produce a meaningful (even empty) result.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("document parsing failed: {0}")]
    Parse(String),
}
