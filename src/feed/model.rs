//! Typed decode targets for the iTunes top-free-apps JSON feed.
//!
//! The feed nests its ranking under `feed.results`; the order of that array
//! is the ranking order and must survive decoding untouched. All fields are
//! kept as the strings the feed provides — no date or URL parsing happens at
//! this layer.

use serde::{Deserialize, Serialize};

/// One app's metadata as returned by the feed.
///
/// All four fields are required; a payload missing any of them fails to
/// decode as a whole. Equality is structural, which is what the filter and
/// the tests rely on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppEntry {
    pub copyright: String,
    /// Display name, the only field the search filter looks at.
    pub name: String,
    /// URL of the 100x100 artwork icon. Carried as data; never fetched here.
    #[serde(rename = "artworkUrl100")]
    pub artwork_icon_url: String,
    /// Release date exactly as the feed formats it (e.g. "2020-01-01").
    pub release_date: String,
}

/// Top-level decode target: `{ "feed": { "results": [...] } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEnvelope {
    pub feed: FeedResults,
}

/// Container holding the ranked entry list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedResults {
    pub results: Vec<AppEntry>,
}

impl FeedEnvelope {
    /// Consumes the envelope, yielding the ranked entry list.
    pub fn into_entries(self) -> Vec<AppEntry> {
        self.feed.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TWO_ENTRY_PAYLOAD: &str = r#"{"feed":{"results":[
        {"copyright":"C1","name":"Alpha","artworkUrl100":"http://x/a.png","releaseDate":"2020-01-01"},
        {"copyright":"C2","name":"Beta","artworkUrl100":"http://x/b.png","releaseDate":"2020-01-02"}
    ]}}"#;

    #[test]
    fn test_decode_preserves_fields_and_order() {
        let envelope: FeedEnvelope = serde_json::from_str(TWO_ENTRY_PAYLOAD).unwrap();
        let entries = envelope.into_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Alpha");
        assert_eq!(entries[0].copyright, "C1");
        assert_eq!(entries[0].artwork_icon_url, "http://x/a.png");
        assert_eq!(entries[0].release_date, "2020-01-01");
        assert_eq!(entries[1].name, "Beta");
    }

    #[test]
    fn test_roundtrip_preserves_entry_list() {
        let envelope: FeedEnvelope = serde_json::from_str(TWO_ENTRY_PAYLOAD).unwrap();
        let json = serde_json::to_string(&envelope).unwrap();
        let again: FeedEnvelope = serde_json::from_str(&json).unwrap();
        assert_eq!(envelope, again);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let payload = r#"{"feed":{"results":[
            {"copyright":"C","name":"N","artworkUrl100":"u","releaseDate":"d","kind":"iosSoftware","id":"1"}
        ],"title":"Top Free","updated":"now"}}"#;
        let envelope: FeedEnvelope = serde_json::from_str(payload).unwrap();
        assert_eq!(envelope.feed.results.len(), 1);
        assert_eq!(envelope.feed.results[0].name, "N");
    }

    #[test]
    fn test_missing_field_fails_whole_decode() {
        // No partial list: one bad entry poisons the entire envelope.
        let payload = r#"{"feed":{"results":[
            {"copyright":"C1","name":"Alpha","artworkUrl100":"u","releaseDate":"d"},
            {"copyright":"C2","name":"Beta"}
        ]}}"#;
        assert!(serde_json::from_str::<FeedEnvelope>(payload).is_err());
    }

    #[test]
    fn test_empty_results_is_valid() {
        let envelope: FeedEnvelope = serde_json::from_str(r#"{"feed":{"results":[]}}"#).unwrap();
        assert!(envelope.into_entries().is_empty());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(serde_json::from_str::<FeedEnvelope>(r#"{"feed": }"#).is_err());
    }
}
