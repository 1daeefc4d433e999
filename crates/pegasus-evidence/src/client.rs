//! HTTP client for the external evidence service.

use crate::parser::parse_listing;
use pegasus_core::IncidentRecord;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("FETCH/{0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct EvidenceListing {
    evidence: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ProcessOutput {
    output_path: String,
}

/// Client for the evidence-listing and video-processing endpoints
#[derive(Clone)]
pub struct EvidenceClient {
    http: reqwest::Client,
    base_url: String,
}

impl EvidenceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a static capture image
    pub fn evidence_url(&self, filename: &str) -> String {
        format!("{}/evidence/{}", self.base_url, filename)
    }

    /// Fetch the full evidence listing and parse it into incident records,
    /// newest first.
    pub async fn fetch_records(&self) -> Result<Vec<IncidentRecord>, FeedError> {
        let listing: EvidenceListing = self
            .http
            .get(format!("{}/api/evidence", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(parse_listing(&listing.evidence, &self.base_url))
    }

    /// Upload a video for ML processing. Blocks until the server finishes and
    /// returns the playback URL of the processed artifact. Unlike the
    /// background poll, failures here are surfaced to the caller.
    pub async fn process_video(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<String, FeedError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let output: ProcessOutput = self
            .http
            .post(format!("{}/api/process-now", self.base_url))
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(format!("{}{}", self.base_url, output.output_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = EvidenceClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.evidence_url("evidence_safety_v1.jpg"),
            "http://localhost:8000/evidence/evidence_safety_v1.jpg"
        );
    }
}
