//! Reqwest-backed remote content generator adapter.
//!
//! This adapter owns transport details only: request construction, timeout
//! and HTTP error mapping, and decoding the plain-text response into created
//! records. The endpoint contract is one paragraph per requested record,
//! paragraphs separated by blank lines.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode, Url};
use uuid::Uuid;

use crate::domain::ContentTypeName;
use crate::domain::ports::{
    CreatedRecord, GeneratorError, RecordContentGenerator, RecordGeneratorFactory,
};

/// Maximum number of words carried from a paragraph into a record title.
const TITLE_WORD_LIMIT: usize = 6;

/// Factory producing [`RemoteContentGenerator`] instances that share one
/// reqwest client.
pub struct RemoteGeneratorFactory {
    client: Client,
    endpoint: Url,
}

impl RemoteGeneratorFactory {
    /// Builds a factory using a reqwest client with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

impl RecordGeneratorFactory for RemoteGeneratorFactory {
    fn create(&self, content_type: &ContentTypeName) -> Arc<dyn RecordContentGenerator> {
        Arc::new(RemoteContentGenerator {
            client: self.client.clone(),
            endpoint: self.endpoint.clone(),
            content_type: content_type.clone(),
        })
    }
}

/// Generator that performs one HTTP GET per batch against the placeholder
/// content endpoint.
pub struct RemoteContentGenerator {
    client: Client,
    endpoint: Url,
    content_type: ContentTypeName,
}

#[async_trait]
impl RecordContentGenerator for RemoteContentGenerator {
    async fn generate(&self, count: u64) -> Result<Vec<CreatedRecord>, GeneratorError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("type", self.content_type.as_str()),
                ("count", &count.to_string()),
            ])
            .header(reqwest::header::ACCEPT, "text/plain")
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_send_error)?;
        if !status.is_success() {
            return Err(map_status_error(status));
        }

        parse_records(&body, count)
    }
}

/// Classifies a reqwest send failure into the generator error vocabulary.
///
/// Timeouts and connection failures are the batch-fatal transport class;
/// everything else is treated as an unusable payload.
fn map_send_error(error: reqwest::Error) -> GeneratorError {
    classify_send_error(error.is_timeout() || error.is_connect(), error.to_string())
}

fn classify_send_error(transport_class: bool, message: String) -> GeneratorError {
    if transport_class {
        GeneratorError::Transport { message }
    } else {
        GeneratorError::Payload { message }
    }
}

fn map_status_error(status: StatusCode) -> GeneratorError {
    GeneratorError::payload(format!(
        "unexpected status {status} from content endpoint"
    ))
}

/// Decodes a plain-text body of blank-line separated paragraphs into created
/// records.
fn parse_records(body: &str, count: u64) -> Result<Vec<CreatedRecord>, GeneratorError> {
    let wanted = usize::try_from(count)
        .map_err(|_| GeneratorError::payload("requested count exceeds addressable size"))?;

    let paragraphs: Vec<&str> = body
        .split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .collect();

    if paragraphs.len() < wanted {
        return Err(GeneratorError::payload(format!(
            "content endpoint returned {} paragraphs, expected {wanted}",
            paragraphs.len()
        )));
    }

    let records = paragraphs
        .into_iter()
        .take(wanted)
        .map(|paragraph| {
            let title = title_from(paragraph);
            CreatedRecord {
                id: Uuid::new_v4(),
                slug: slugify(&title),
                title,
                created_at: Utc::now(),
            }
        })
        .collect();
    Ok(records)
}

/// Takes the leading words of a paragraph as a record title.
fn title_from(paragraph: &str) -> String {
    paragraph
        .split_whitespace()
        .take(TITLE_WORD_LIMIT)
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end_matches(['.', ',', ';', ':'])
        .to_owned()
}

/// Lowercases ASCII alphanumerics; runs of other characters collapse to a
/// single hyphen.
fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
