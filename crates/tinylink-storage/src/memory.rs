use parking_lot::RwLock;
use std::collections::HashMap;
use tinylink_core::repository::{ReadRepository, Repository, Result};
use tinylink_core::{OriginalUrl, ShortCode, StorageError};
use tracing::{debug, trace, warn};

/// Both directions of every mapping. Only ever touched under one lock, so
/// `reverse` is always the exact inverse of `forward`.
#[derive(Debug, Default)]
struct Mappings {
    forward: HashMap<ShortCode, OriginalUrl>,
    reverse: HashMap<OriginalUrl, ShortCode>,
}

/// In-memory implementation of the Repository trait.
///
/// A single reader/writer lock guards the forward and the reverse map
/// together. Lookups take it shared and run concurrently; inserts take it
/// exclusively and update both maps in one critical section. A sharded map
/// per direction would let a reader see one half of an insert.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    mappings: RwLock<Mappings>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            mappings: RwLock::new(Mappings {
                forward: HashMap::with_capacity(capacity),
                reverse: HashMap::with_capacity(capacity),
            }),
        }
    }

    /// Number of stored mapping pairs.
    pub fn len(&self) -> usize {
        self.mappings.read().forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReadRepository for InMemoryRepository {
    fn get(&self, code: &ShortCode) -> Result<Option<OriginalUrl>> {
        let url = self.mappings.read().forward.get(code).cloned();
        trace!(code = %code, found = url.is_some(), "forward lookup");
        Ok(url)
    }

    fn find_code(&self, url: &OriginalUrl) -> Result<Option<ShortCode>> {
        let code = self.mappings.read().reverse.get(url).cloned();
        trace!(url = %url, found = code.is_some(), "reverse lookup");
        Ok(code)
    }
}

impl Repository for InMemoryRepository {
    fn insert(&self, code: ShortCode, url: OriginalUrl) -> Result<ShortCode> {
        let mut mappings = self.mappings.write();

        // A concurrent caller may have stored this URL since its reverse lookup missed.
        if let Some(existing) = mappings.reverse.get(&url) {
            trace!(code = %existing, url = %url, "url already mapped");
            return Ok(existing.clone());
        }

        if let Some(taken_by) = mappings.forward.get(&code) {
            warn!(code = %code, url = %url, taken_by = %taken_by, "short code collision");
            return Err(StorageError::Collision {
                code: code.to_string(),
            });
        }

        debug!(code = %code, url = %url, "storing new mapping");
        mappings.forward.insert(code.clone(), url.clone());
        mappings.reverse.insert(url, code.clone());

        Ok(code)
    }
}
