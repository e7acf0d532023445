pub mod loader;
pub mod url_check;

use serde::Deserialize;
use thiserror::Error;

/// A named monitoring target with one or more equivalent URLs.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Check {
    pub name: String,
    pub urls: Vec<String>,
    #[serde(rename = "code")]
    pub expected_code: u16,
    /// Substring the response body must contain. Empty means the body is not checked.
    #[serde(rename = "body", default)]
    pub expected_body: String,
}

impl Check {
    pub fn checks_body(&self) -> bool {
        !self.expected_body.is_empty()
    }
}

/// The reason a URL did not pass its check.
#[derive(Error, Debug)]
pub enum CheckFailure {
    #[error("Check '{check}': request failed for {url}: {source}")]
    Request {
        check: String,
        url: String,
        source: reqwest::Error,
    },
    #[error("Check '{check}': wrong status code for {url}: expected {expected}, received {actual}")]
    StatusMismatch {
        check: String,
        url: String,
        expected: u16,
        actual: u16,
    },
    #[error("Check '{check}': response from {url} doesn't contain expected content: \"{expected}\"")]
    BodyMismatch {
        check: String,
        url: String,
        expected: String,
    },
}

impl CheckFailure {
    pub fn check(&self) -> &str {
        match self {
            CheckFailure::Request { check, .. }
            | CheckFailure::StatusMismatch { check, .. }
            | CheckFailure::BodyMismatch { check, .. } => check,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            CheckFailure::Request { url, .. }
            | CheckFailure::StatusMismatch { url, .. }
            | CheckFailure::BodyMismatch { url, .. } => url,
        }
    }
}
