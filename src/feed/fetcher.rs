use crate::app::AppEvent;
use crate::feed::model::{AppEntry, FeedEnvelope};
use futures::stream::StreamExt;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use url::Url;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_BODY_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Errors that can occur while fetching and decoding the feed.
///
/// The loader treats all of these identically (log and publish nothing);
/// the distinctions exist for diagnostics and tests.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// Request exceeded the 30-second timeout
    #[error("Request timed out")]
    Timeout,
    /// HTTP response with non-2xx status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Response completed with a zero-length body
    #[error("Empty response body")]
    EmptyBody,
    /// Response body exceeded the 10MB size limit
    #[error("Response too large")]
    ResponseTooLarge,
    /// Body was not valid JSON, or did not match the feed schema
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetches the feed once and decodes it into the ranked entry list.
///
/// A single GET with a 30-second timeout and a bounded body read. There is
/// deliberately no retry: one shot, succeed or report why not.
///
/// # Errors
///
/// Any [`FetchError`] variant. A decode failure is atomic — either the whole
/// envelope parses or nothing is returned.
pub async fn fetch_feed(client: &reqwest::Client, url: &Url) -> Result<Vec<AppEntry>, FetchError> {
    let response = tokio::time::timeout(FETCH_TIMEOUT, client.get(url.as_str()).send())
        .await
        .map_err(|_| FetchError::Timeout)?
        .map_err(FetchError::Network)?;

    if !response.status().is_success() {
        return Err(FetchError::HttpStatus(response.status().as_u16()));
    }

    let bytes = read_limited_bytes(response, MAX_BODY_SIZE).await?;
    if bytes.is_empty() {
        return Err(FetchError::EmptyBody);
    }

    let envelope: FeedEnvelope = serde_json::from_slice(&bytes)?;
    Ok(envelope.into_entries())
}

/// Spawns the one-shot background load.
///
/// On success the decoded list is marshaled to the UI task by sending
/// [`AppEvent::FeedLoaded`] on `tx`; the UI task is the only place the
/// published list is ever written. On any failure a diagnostic is logged and
/// nothing is sent, leaving the published list as it was (empty). No retry,
/// no user-facing error surface.
pub fn load_in_background(
    client: reqwest::Client,
    url: Url,
    tx: mpsc::Sender<AppEvent>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        match fetch_feed(&client, &url).await {
            Ok(entries) => {
                tracing::debug!(count = entries.len(), url = %url, "Feed loaded");
                if let Err(e) = tx.send(AppEvent::FeedLoaded(entries)).await {
                    tracing::warn!(error = %e, "UI channel closed before feed publish");
                }
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Feed load failed, keeping list empty");
            }
        }
    })
}

async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, FetchError> {
    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            return Err(FetchError::ResponseTooLarge);
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(FetchError::Network)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FetchError::ResponseTooLarge);
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}
