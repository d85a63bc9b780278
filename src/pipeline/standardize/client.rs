use std::collections::VecDeque;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::StandardizeError;

/// Completion client for the rename model.
///
/// One prompt in, one short completion out. Implementations decide where
/// the model runs; the pipeline only sees this trait, so it can be tested
/// and used with the capability entirely absent.
pub trait RenameClient {
    fn complete(&self, prompt: &str) -> Result<String, StandardizeError>;
}

/// HTTP client for a local Ollama-compatible generate endpoint.
pub struct HttpRenameClient {
    base_url: String,
    model: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl HttpRenameClient {
    pub fn new(base_url: &str, model: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client,
            timeout_secs,
        }
    }

    /// Default local instance at localhost:11434 with a 2-minute timeout.
    pub fn default_local() -> Self {
        Self::new("http://localhost:11434", "medgemma:latest", 120)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Request body for /api/generate
#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Response body from /api/generate
#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl RenameClient for HttpRenameClient {
    fn complete(&self, prompt: &str) -> Result<String, StandardizeError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let response = self.client.post(&url).json(&body).send().map_err(|e| {
            if e.is_connect() {
                StandardizeError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                StandardizeError::Timeout { seconds: self.timeout_secs }
            } else {
                StandardizeError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(StandardizeError::ServiceError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| StandardizeError::ResponseParsing(e.to_string()))?;

        Ok(parsed.response)
    }
}

/// Mock rename client — fixed or scripted responses, call counting.
pub struct MockRenameClient {
    script: Mutex<VecDeque<Result<String, StandardizeError>>>,
    fallback: String,
    calls: Mutex<usize>,
}

impl MockRenameClient {
    /// Always answers with the same completion.
    pub fn new(response: &str) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: response.to_string(),
            calls: Mutex::new(0),
        }
    }

    /// Answers from a script first, then falls back to the fixed response.
    pub fn scripted(outcomes: Vec<Result<String, StandardizeError>>) -> Self {
        Self {
            script: Mutex::new(outcomes.into()),
            fallback: "Standardized".to_string(),
            calls: Mutex::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().expect("mock call counter poisoned")
    }
}

impl RenameClient for MockRenameClient {
    fn complete(&self, _prompt: &str) -> Result<String, StandardizeError> {
        *self.calls.lock().expect("mock call counter poisoned") += 1;
        match self.script.lock().expect("mock script poisoned").pop_front() {
            Some(outcome) => outcome,
            None => Ok(self.fallback.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_returns_fixed_response_and_counts_calls() {
        let client = MockRenameClient::new("Ferritin");
        assert_eq!(client.complete("anything").unwrap(), "Ferritin");
        assert_eq!(client.complete("anything").unwrap(), "Ferritin");
        assert_eq!(client.calls(), 2);
    }

    #[test]
    fn scripted_mock_plays_outcomes_in_order() {
        let client = MockRenameClient::scripted(vec![
            Err(StandardizeError::Timeout { seconds: 1 }),
            Ok("Sodium".into()),
        ]);
        assert!(client.complete("p").is_err());
        assert_eq!(client.complete("p").unwrap(), "Sodium");
        assert_eq!(client.complete("p").unwrap(), "Standardized");
    }

    #[test]
    fn http_client_trims_trailing_slash() {
        let client = HttpRenameClient::new("http://localhost:11434/", "medgemma:latest", 60);
        assert_eq!(client.base_url(), "http://localhost:11434");
    }

    #[test]
    fn default_local_uses_standard_port() {
        let client = HttpRenameClient::default_local();
        assert_eq!(client.base_url(), "http://localhost:11434");
    }
}
