//! Feed URL construction for the iTunes top-free-apps endpoint.

use thiserror::Error;
use url::Url;

/// Default store region.
pub const DEFAULT_REGION: &str = "kr";
/// Default number of ranking entries to request.
pub const DEFAULT_LIMIT: u32 = 100;

const MAX_LIMIT: u32 = 200;

/// Errors that can occur while building a feed URL.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Region is empty or contains non-ASCII-alphabetic characters.
    #[error("Invalid region code: {0:?} (expected a short code like \"kr\" or \"us\")")]
    InvalidRegion(String),
    /// Limit is zero or above the endpoint's maximum.
    #[error("Invalid entry limit: {0} (expected 1..={MAX_LIMIT})")]
    InvalidLimit(u32),
    /// The assembled string did not parse as a URL.
    #[error("Invalid feed URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Identifies which slice of the ranking to fetch: a store region and an
/// entry count. The endpoint itself is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSource {
    region: String,
    limit: u32,
}

impl Default for FeedSource {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl FeedSource {
    /// Creates a source after validating the region code and limit.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidRegion`] unless the region is 2-3 ASCII
    /// letters, or [`SourceError::InvalidLimit`] unless the limit is within
    /// `1..=200`.
    pub fn new(region: &str, limit: u32) -> Result<Self, SourceError> {
        let region = region.trim().to_ascii_lowercase();
        if region.len() < 2 || region.len() > 3 || !region.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(SourceError::InvalidRegion(region));
        }
        if limit == 0 || limit > MAX_LIMIT {
            return Err(SourceError::InvalidLimit(limit));
        }
        Ok(Self { region, limit })
    }

    /// Builds the full feed URL for this source.
    pub fn url(&self) -> Result<Url, SourceError> {
        let url = Url::parse(&format!(
            "https://rss.itunes.apple.com/api/v1/{}/ios-apps/top-free/all/{}/explicit.json",
            self.region, self.limit
        ))?;
        Ok(url)
    }
}
