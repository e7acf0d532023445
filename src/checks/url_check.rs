use crate::checks::{Check, CheckFailure};
use log::debug;
use reqwest::Client;

/// Evaluates the URLs of a single check, in order, stopping at the first failure.
pub struct UrlCheck<'a> {
    check: &'a Check,
    client: &'a Client,
}

impl<'a> UrlCheck<'a> {
    pub fn new(check: &'a Check, client: &'a Client) -> Self {
        Self { check, client }
    }

    pub fn name(&self) -> &str {
        &self.check.name
    }

    pub async fn run(&self) -> Result<(), CheckFailure> {
        for url in &self.check.urls {
            self.check_url(url).await?;
        }
        Ok(())
    }

    async fn check_url(&self, url: &str) -> Result<(), CheckFailure> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.request_failure(url, e))?;

        let actual = response.status().as_u16();
        if actual != self.check.expected_code {
            return Err(CheckFailure::StatusMismatch {
                check: self.check.name.clone(),
                url: url.to_string(),
                expected: self.check.expected_code,
                actual,
            });
        }

        if !self.check.checks_body() {
            return Ok(());
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.request_failure(url, e))?;
        if !body.contains(&self.check.expected_body) {
            return Err(CheckFailure::BodyMismatch {
                check: self.check.name.clone(),
                url: url.to_string(),
                expected: self.check.expected_body.clone(),
            });
        }
        Ok(())
    }

    fn request_failure(&self, url: &str, source: reqwest::Error) -> CheckFailure {
        CheckFailure::Request {
            check: self.check.name.clone(),
            url: url.to_string(),
            source,
        }
    }
}
