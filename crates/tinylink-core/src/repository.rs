use crate::error::StorageError;
use crate::original_url::OriginalUrl;
use crate::shortcode::ShortCode;

pub type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of a bidirectional repository.
///
/// Both lookups are point reads; implementations must never expose a state in
/// which one direction of a mapping is visible and the other is not.
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the URL a short code points to (forward mapping).
    /// Returns `None` if the code does not exist.
    fn get(&self, code: &ShortCode) -> Result<Option<OriginalUrl>>;

    /// Retrieves the short code already issued for a URL (reverse mapping).
    /// Returns `None` if the URL has not been shortened yet.
    fn find_code(&self, url: &OriginalUrl) -> Result<Option<ShortCode>>;
}

pub trait Repository: ReadRepository {
    /// Stores `code <-> url` in both directions at once.
    ///
    /// Returns the code that maps to `url` after the call. That is `code`
    /// itself unless `url` was already present, in which case the existing
    /// code wins and nothing is written. Returns `Err(Collision)` if `code`
    /// already maps to a different URL.
    fn insert(&self, code: ShortCode, url: OriginalUrl) -> Result<ShortCode>;
}
