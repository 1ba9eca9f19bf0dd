use crate::error::{Result, ShortenerError};
use crate::shortener::Shortener;
use std::sync::Arc;
use tinylink_core::fingerprint::{fingerprint, probe};
use tinylink_core::{OriginalUrl, Repository, ShortCode, StorageError};
use tracing::{debug, trace, warn};
use typed_builder::TypedBuilder;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 16;

/// Tunables of the shortener service.
#[derive(Debug, Clone, TypedBuilder)]
pub struct ShortenerSettings {
    /// How many probe positions to try before giving up on a URL whose
    /// fingerprint collides with already issued codes.
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` to handle:
/// - URL validation
/// - Deterministic code derivation (CRC-32 fingerprint, base62 encoded)
/// - Collision probing when a code is already taken by another URL
///
/// Generation is idempotent per exact URL string: a URL that is already
/// stored gets its existing code back.
#[derive(Debug)]
pub struct ShortenerService<R> {
    repository: Arc<R>,
    settings: ShortenerSettings,
}

impl<R> Clone for ShortenerService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            settings: self.settings.clone(),
        }
    }
}

impl<R: Repository> ShortenerService<R> {
    /// Creates a new `ShortenerService` with default settings.
    pub fn new(repository: R) -> Self {
        Self::with_settings(repository, ShortenerSettings::default())
    }

    pub fn with_settings(repository: R, settings: ShortenerSettings) -> Self {
        let settings = ShortenerSettings {
            max_attempts: settings.max_attempts.max(1),
        };
        Self {
            repository: Arc::new(repository),
            settings,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn settings(&self) -> &ShortenerSettings {
        &self.settings
    }

    /// Walks the probe sequence of the URL's fingerprint until the repository
    /// accepts a code.
    fn claim_code(&self, url: OriginalUrl) -> Result<ShortCode> {
        let seed = fingerprint(url.as_bytes());

        for attempt in 0..self.settings.max_attempts {
            let candidate = ShortCode::encode(probe(seed, attempt));
            match self.repository.insert(candidate, url.clone()) {
                Ok(code) => {
                    if attempt > 0 {
                        debug!(code = %code, url = %url, attempt, "claimed probed short code");
                    }
                    return Ok(code);
                }
                Err(StorageError::Collision { code }) => {
                    warn!(code = %code, url = %url, attempt, "fingerprint collision, probing");
                }
            }
        }

        Err(ShortenerError::CodeSpaceExhausted {
            url: url.into_inner(),
            attempts: self.settings.max_attempts,
        })
    }
}

impl<R: Repository> Shortener for ShortenerService<R> {
    fn shorten(&self, raw_url: &str) -> Result<ShortCode> {
        let url = OriginalUrl::parse(raw_url)?;

        if let Some(code) = self.repository.find_code(&url)? {
            trace!(code = %code, url = %url, "url already shortened");
            return Ok(code);
        }

        self.claim_code(url)
    }

    fn resolve(&self, code: &str) -> Result<OriginalUrl> {
        // A malformed code was never issued, so it is simply unknown.
        let parsed =
            ShortCode::parse(code).map_err(|_| ShortenerError::NotFound(code.to_string()))?;

        self.repository
            .get(&parsed)?
            .ok_or_else(|| ShortenerError::NotFound(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Barrier;
    use std::thread;
    use tinylink_storage::InMemoryRepository;

    fn test_service() -> ShortenerService<InMemoryRepository> {
        ShortenerService::new(InMemoryRepository::new())
    }

    #[test]
    fn shorten_then_resolve() {
        let service = test_service();

        let code = service.shorten("https://example.com/a").unwrap();
        assert_eq!(code.as_str(), "1veLGQ");

        let url = service.resolve(code.as_str()).unwrap();
        assert_eq!(url.as_str(), "https://example.com/a");
    }

    #[test]
    fn shorten_is_idempotent() {
        let service = test_service();

        let first = service.shorten("https://example.com/a").unwrap();
        assert_eq!(service.repository().len(), 1);

        let second = service.shorten("https://example.com/a").unwrap();
        assert_eq!(first, second);
        assert_eq!(service.repository().len(), 1);
    }

    #[test]
    fn shorten_is_deterministic_across_instances() {
        let a = test_service().shorten("https://example.com/a").unwrap();
        let b = test_service().shorten("https://example.com/a").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn trailing_slash_is_a_different_url() {
        let service = test_service();

        let with_slash = service.shorten("http://a/").unwrap();
        let without_slash = service.shorten("http://a").unwrap();

        assert_ne!(with_slash, without_slash);
        assert_eq!(service.repository().len(), 2);
    }

    #[test]
    fn shorten_empty_url_fails() {
        let service = test_service();

        let err = service.shorten("").unwrap_err();
        assert!(matches!(err, ShortenerError::InvalidInput(_)));
        assert!(service.repository().is_empty());
    }

    #[test]
    fn shorten_malformed_url_fails() {
        let service = test_service();

        let err = service.shorten("not-a-valid-url").unwrap_err();
        assert!(matches!(err, ShortenerError::InvalidInput(_)));
        assert!(service.repository().is_empty());
    }

    #[test]
    fn resolve_unknown_code() {
        let service = test_service();

        let err = service.resolve("doesnotexist").unwrap_err();
        assert_eq!(err, ShortenerError::NotFound("doesnotexist".to_string()));

        let err = service.resolve("abc").unwrap_err();
        assert_eq!(err, ShortenerError::NotFound("abc".to_string()));
    }

    #[test]
    fn colliding_fingerprints_get_distinct_codes() {
        let service = test_service();

        // Both URLs have CRC-32 1982248261.
        let first = service.shorten("https://example.com/kepflqfv").unwrap();
        let second = service.shorten("https://example.com/mtki").unwrap();

        assert_eq!(first.as_str(), "2A9JK9");
        assert_eq!(second.as_str(), "N7o8E");
        assert_eq!(
            service.resolve("2A9JK9").unwrap().as_str(),
            "https://example.com/kepflqfv"
        );
        assert_eq!(
            service.resolve("N7o8E").unwrap().as_str(),
            "https://example.com/mtki"
        );

        // The probed URL keeps its code on later requests.
        assert_eq!(service.shorten("https://example.com/mtki").unwrap(), second);
        assert_eq!(service.repository().len(), 2);
    }

    #[test]
    fn exhausted_probe_sequence_is_reported() {
        let settings = ShortenerSettings::builder().max_attempts(2).build();
        let service = ShortenerService::with_settings(InMemoryRepository::new(), settings);
        let fp = fingerprint("https://example.com/a");

        for attempt in 0..2 {
            let squatter = OriginalUrl::parse(format!("https://squatter{}.com", attempt)).unwrap();
            service
                .repository()
                .insert(ShortCode::encode(probe(fp, attempt)), squatter)
                .unwrap();
        }

        let err = service.shorten("https://example.com/a").unwrap_err();
        assert_eq!(
            err,
            ShortenerError::CodeSpaceExhausted {
                url: "https://example.com/a".to_string(),
                attempts: 2,
            }
        );
        assert_eq!(service.repository().len(), 2);
    }

    #[test]
    fn zero_attempts_is_clamped() {
        let settings = ShortenerSettings::builder().max_attempts(0).build();
        let service = ShortenerService::with_settings(InMemoryRepository::new(), settings);

        assert_eq!(service.settings().max_attempts, 1);
        assert!(service.shorten("https://example.com/a").is_ok());
    }

    #[test]
    fn default_settings() {
        assert_eq!(ShortenerSettings::default().max_attempts, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn concurrent_shorten_of_same_url() {
        const THREADS: usize = 16;
        let service = test_service();
        let barrier = Barrier::new(THREADS);

        let codes: Vec<ShortCode> = thread::scope(|s| {
            let (service, barrier) = (&service, &barrier);
            let handles: Vec<_> = (0..THREADS)
                .map(move |_| {
                    s.spawn(move || {
                        barrier.wait();
                        service.shorten("https://example.com/race").unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(codes.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(service.repository().len(), 1);
        assert_eq!(
            service.resolve(codes[0].as_str()).unwrap().as_str(),
            "https://example.com/race"
        );
    }

    #[test]
    fn concurrent_shorten_of_distinct_urls() {
        const THREADS: u32 = 8;
        const PER_THREAD: u32 = 100;
        let service = test_service();

        thread::scope(|s| {
            let service = &service;
            for t in 0..THREADS {
                s.spawn(move || {
                    for i in 0..PER_THREAD {
                        let url = format!("https://example.com/{}/{}", t, i);
                        let code = service.shorten(&url).unwrap();
                        assert_eq!(service.resolve(code.as_str()).unwrap().as_str(), url);
                    }
                });
            }
        });

        assert_eq!(service.repository().len(), (THREADS * PER_THREAD) as usize);
    }

    #[test]
    fn shared_clone_sees_same_mappings() {
        let service = test_service();
        let cloned = service.clone();

        let code = service.shorten("https://example.com/a").unwrap();
        assert_eq!(
            cloned.resolve(code.as_str()).unwrap().as_str(),
            "https://example.com/a"
        );
    }
}
