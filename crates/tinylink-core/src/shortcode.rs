use crate::base62;
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;

/// A base62 short code identifying a shortened URL.
///
/// Every code is the base62 encoding of some `u32`, so it is 1-6 symbols
/// long and contains only `[0-9A-Za-z]`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ShortCode(SmolStr);

impl ShortCode {
    /// Creates the code for a 32-bit value.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinylink_core::ShortCode;
    ///
    /// assert_eq!(ShortCode::encode(0).as_str(), "0");
    /// assert_eq!(ShortCode::encode(62).as_str(), "10");
    /// ```
    pub fn encode(n: u32) -> Self {
        Self(SmolStr::new(base62::encode(n)))
    }

    /// Parses a code received from the outside world.
    ///
    /// Accepts exactly the strings [`ShortCode::encode`] can produce: empty
    /// input, foreign symbols, leading zeros and values past `u32::MAX`
    /// are rejected.
    pub fn parse(code: impl AsRef<str>) -> Result<Self> {
        let code = code.as_ref();
        Self::validate(code)?;
        Ok(Self(SmolStr::new(code)))
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> Result<()> {
        if code.is_empty() || code.len() > base62::MAX_ENCODED_LEN {
            return Err(CoreError::InvalidShortCode(format!(
                "length must be between 1 and {}, got {}",
                base62::MAX_ENCODED_LEN,
                code.len()
            )));
        }

        if !code.chars().all(base62::is_symbol) {
            return Err(CoreError::InvalidShortCode(format!(
                "must contain only base62 characters: '{}'",
                code
            )));
        }

        match base62::decode(code) {
            Some(n) if base62::encode(n) == code => Ok(()),
            _ => Err(CoreError::InvalidShortCode(format!(
                "not the encoding of a 32-bit value: '{}'",
                code
            ))),
        }
    }
}

impl From<u32> for ShortCode {
    fn from(n: u32) -> Self {
        Self::encode(n)
    }
}

impl std::fmt::Debug for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ShortCode").field(&self.0).finish()
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ShortCode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ShortCode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
