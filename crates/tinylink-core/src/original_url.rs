use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A syntactically valid URL, stored exactly as it was submitted.
///
/// Parsing is validation only: `http://a/` and `http://a` stay distinct and no
/// scheme or host normalization takes place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OriginalUrl(String);

impl OriginalUrl {
    /// Validates `raw` against the WHATWG URL grammar.
    ///
    /// The URL must be absolute (carry a scheme); relative references are
    /// rejected since they cannot be redirected to.
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(CoreError::InvalidUrl("url cannot be empty".to_string()));
        }

        // The URL parser silently strips these, which would make the stored
        // key differ from what was validated.
        if raw.trim() != raw || raw.chars().any(|c| c.is_ascii_control()) {
            return Err(CoreError::InvalidUrl(format!(
                "url contains surrounding whitespace or control characters: {:?}",
                raw
            )));
        }

        url::Url::parse(&raw).map_err(|e| CoreError::InvalidUrl(format!("{}: {}", e, raw)))?;

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for OriginalUrl {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<OriginalUrl> for String {
    fn from(value: OriginalUrl) -> Self {
        value.0
    }
}

impl Display for OriginalUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
