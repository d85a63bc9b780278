pub mod analyzer;
pub mod engine;
pub mod extraction;
pub mod standardize;

pub use analyzer::*;

use thiserror::Error;

use extraction::SourceError;
use standardize::StandardizeError;

/// Failures that surface to the caller of the full pipeline.
///
/// Extraction-level issues (malformed lines, lines neither grammar matches,
/// unparseable numeric captures) are recovered locally with skip-and-continue
/// and never appear here. Only total input unavailability or a collaborator
/// failure aborts an analysis.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("document text extraction failed: {0}")]
    DocumentSource(#[from] SourceError),

    #[error("name standardization failed: {0}")]
    Standardization(#[from] StandardizeError),
}
