use crate::error::Result;
use tinylink_core::{OriginalUrl, ShortCode};

/// The two operations the transport layer relies on.
pub trait Shortener: Send + Sync + 'static {
    /// Returns the short code for `raw_url`, issuing one on first use.
    ///
    /// Fails with `InvalidInput` if the URL is empty or malformed.
    fn shorten(&self, raw_url: &str) -> Result<ShortCode>;

    /// Retrieves the URL a short code was issued for.
    ///
    /// Fails with `NotFound` if no such code was issued, including codes
    /// that are not well-formed base62.
    fn resolve(&self, code: &str) -> Result<OriginalUrl>;
}
