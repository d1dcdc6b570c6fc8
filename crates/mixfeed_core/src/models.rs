use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One parsed feed entry. Either every required field was present in the
/// source item and the Article exists, or the item was skipped entirely;
/// there are no partially filled Articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub author: String,
    /// Provider-native date string, kept verbatim; see [`display_date`].
    pub published_at: String,
    pub summary: String,
    pub url: String,
    pub section: Option<String>,
}

/// Feed sort order, mapped to the `order-by` query token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
        }
    }

    /// Parse a persisted preference token. Unknown tokens yield `None` so the
    /// caller can fall back to the default.
    pub fn from_param(token: &str) -> Option<Self> {
        match token {
            "newest" => Some(SortOrder::Newest),
            "oldest" => Some(SortOrder::Oldest),
            _ => None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// Reformat a provider date string (RFC 3339) for list rows, e.g. "Mar 3, 1984".
/// Returns `None` when the string does not parse; the row then shows the raw
/// string instead.
pub fn display_date(provider_date: &str) -> Option<String> {
    let parsed = DateTime::parse_from_rfc3339(provider_date).ok()?;
    Some(parsed.format("%b %-d, %Y").to_string())
}
