use std::time::Duration;

use tracing::{debug, warn};

use crate::models::BiomarkerRecord;

use super::client::RenameClient;
use super::language::Language;
use super::prompt::build_rename_prompt;
use super::StandardizeError;

/// Bounded exponential backoff for transient rename failures.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: usize,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    /// Delay before retrying after the given zero-based failed attempt:
    /// base, 2x base, 4x base, ... capped at `max_delay`.
    pub fn delay_for(&self, attempt: usize) -> Duration {
        let factor = 1u32 << attempt.min(16) as u32;
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

impl Default for RetryPolicy {
    /// Five attempts, 2s base, 60s cap.
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_secs(2),
            max_delay: Duration::from_secs(60),
        }
    }
}

/// Renames extracted test names into the canonical vocabulary via the
/// rename model, in the configured target language.
///
/// Standardization is a post-processing pass over an already-complete
/// record collection; the extraction result never depends on it. Renaming
/// a record also renames its view `id`, which mirrors `name`.
pub struct Standardizer {
    client: Box<dyn RenameClient + Send + Sync>,
    language: Language,
    retry: RetryPolicy,
}

impl Standardizer {
    pub fn new(client: Box<dyn RenameClient + Send + Sync>, language: Language) -> Self {
        Self {
            client,
            language,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Rename every record in place. Fails as a whole on a non-transient
    /// error or once retries are exhausted — the caller still holds the
    /// unstandardized records it extracted.
    pub fn standardize(&self, records: &mut [BiomarkerRecord]) -> Result<(), StandardizeError> {
        for record in records.iter_mut() {
            let prompt = build_rename_prompt(&record.name, self.language);
            let completion = self.complete_with_retry(&prompt)?;
            let renamed = completion.trim();
            if renamed.is_empty() {
                warn!(name = %record.name, "empty rename completion, keeping original name");
                continue;
            }
            debug!(from = %record.name, to = renamed, "standardized biomarker name");
            record.name = renamed.to_string();
        }
        Ok(())
    }

    fn complete_with_retry(&self, prompt: &str) -> Result<String, StandardizeError> {
        let mut attempt = 0;
        loop {
            match self.client.complete(prompt) {
                Ok(completion) => return Ok(completion),
                Err(e) if e.is_retryable() && attempt + 1 < self.retry.max_attempts => {
                    let delay = self.retry.delay_for(attempt);
                    warn!(
                        attempt = attempt + 1,
                        error = %e,
                        delay_ms = delay.as_millis() as u64,
                        "rename call failed, retrying"
                    );
                    std::thread::sleep(delay);
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
