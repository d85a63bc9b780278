//! Structured record extraction from flattened clinical lab-report text.
//!
//! The pipeline normalizes report lines, runs two regex grammars (two-sided
//! reference ranges and one-sided thresholds) over every surviving line,
//! and assembles the matches into an ordered record collection. Document
//! reading and name standardization are injected collaborators; extraction
//! itself is pure and offline.

pub mod config;
pub mod models;
pub mod pipeline;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for binaries and integration harnesses.
///
/// Library code only emits events; whoever embeds the crate decides whether
/// to install a subscriber. Respects `RUST_LOG` when set.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
