//! Key-value store for persisted session state
//!
//! This module defines the async [`KeyValueStore`] interface every component
//! receives by injection, plus two implementations: a durable sled-backed
//! [`KvStore`] and an in-memory [`MemoryStore`] for tests and previews.

use async_trait::async_trait;
use sled::Db;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// Key-value store error types
#[derive(Debug, Error)]
pub enum KvError {
    /// Sled database error
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Stored bytes were not valid UTF-8
    #[error("Invalid encoding for key {0}")]
    Encoding(String),

    /// Invalid key
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Backend-specific failure (used by fakes and adapters)
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Result type for key-value operations
pub type Result<T> = std::result::Result<T, KvError>;

/// Async string key-value store
///
/// All operations may suspend and may fail. A successful `set` or `remove`
/// means the change is durable for the backing implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value, `None` when the key is absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a value; removing an absent key is not an error
    async fn remove(&self, key: &str) -> Result<()>;
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(KvError::InvalidKey("key must not be empty".to_string()));
    }
    Ok(())
}

// =============================================================================
// In-memory store
// =============================================================================

/// In-memory key-value store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Check if the store is empty
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Snapshot of every entry, sorted by key
    pub async fn snapshot(&self) -> Vec<(String, String)> {
        let entries = self.entries.read().await;
        let mut data: Vec<_> = entries.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        data.sort();
        data
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.entries.write().await.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.entries.write().await.remove(key);
        Ok(())
    }
}

// =============================================================================
// Sled-backed store
// =============================================================================

/// Key-value store configuration
#[derive(Debug, Clone)]
pub struct KvConfig {
    /// Database path
    pub path: String,
    /// Cache capacity in bytes
    pub cache_capacity: u64,
    /// Enable compression
    pub use_compression: bool,
    /// Background flush interval in milliseconds (None disables it)
    pub flush_every_ms: Option<u64>,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            path: "rove_kv.db".to_string(),
            cache_capacity: 8 * 1024 * 1024, // 8MB
            use_compression: true,
            flush_every_ms: Some(500),
        }
    }
}

impl KvConfig {
    /// Create a new configuration with a custom path
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), ..Default::default() }
    }

    /// Set cache capacity in bytes
    pub fn cache_capacity(mut self, bytes: u64) -> Self {
        self.cache_capacity = bytes;
        self
    }

    /// Enable or disable compression
    pub fn use_compression(mut self, enabled: bool) -> Self {
        self.use_compression = enabled;
        self
    }

    /// Set flush interval in milliseconds
    pub fn flush_every_ms(mut self, ms: Option<u64>) -> Self {
        self.flush_every_ms = ms;
        self
    }
}

/// Durable key-value store backed by sled
///
/// Every write is flushed before it returns, so a caller that sees `Ok(())`
/// can report success to the user.
#[derive(Clone)]
pub struct KvStore {
    db: Arc<Db>,
}

impl KvStore {
    /// Open (or create) a store with configuration
    pub fn open(config: &KvConfig) -> Result<Self> {
        let db = sled::Config::new()
            .path(&config.path)
            .cache_capacity(config.cache_capacity)
            .use_compression(config.use_compression)
            .flush_every_ms(config.flush_every_ms)
            .open()?;

        tracing::debug!(path = %config.path, "opened key-value store");
        Ok(Self { db: Arc::new(db) })
    }

    /// Create a temporary store that is deleted on drop
    pub fn temporary() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;
        Ok(Self { db: Arc::new(db) })
    }

    /// Get the number of keys in the store
    pub fn len(&self) -> usize {
        self.db.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for KvStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        match self.db.get(key.as_bytes())? {
            Some(bytes) => String::from_utf8(bytes.to_vec())
                .map(Some)
                .map_err(|_| KvError::Encoding(key.to_string())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.db.insert(key.as_bytes(), value.as_bytes())?;
        self.db.flush_async().await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        if self.db.remove(key.as_bytes())?.is_some() {
            self.db.flush_async().await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_memory_set_and_get() {
        let store = MemoryStore::new();
        store.set("key", "value").await.unwrap();

        assert_eq!(store.get("key").await.unwrap(), Some("value".to_string()));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_memory_get_nonexistent() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_memory_remove() {
        let store = MemoryStore::new();
        store.set("key", "value").await.unwrap();
        store.remove("key").await.unwrap();
        assert_eq!(store.get("key").await.unwrap(), None);

        // Removing again is fine
        store.remove("key").await.unwrap();
    }

    #[tokio::test]
    async fn test_memory_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("shared", "yes").await.unwrap();
        assert_eq!(other.get("shared").await.unwrap(), Some("yes".to_string()));
    }

    #[tokio::test]
    async fn test_empty_key_rejected() {
        let store = MemoryStore::new();
        assert!(matches!(store.set("", "v").await, Err(KvError::InvalidKey(_))));
        assert!(matches!(store.get("").await, Err(KvError::InvalidKey(_))));
    }

    #[tokio::test]
    async fn test_sled_set_get_remove() {
        let store = KvStore::temporary().unwrap();
        assert!(store.is_empty());

        store.set("userExperience", "thread").await.unwrap();
        assert_eq!(store.get("userExperience").await.unwrap(), Some("thread".to_string()));
        assert_eq!(store.len(), 1);

        store.remove("userExperience").await.unwrap();
        assert_eq!(store.get("userExperience").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_sled_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kv.db");
        let config = KvConfig::new(path.to_string_lossy()).flush_every_ms(None);

        {
            let store = KvStore::open(&config).unwrap();
            store.set("onboardingComplete", "true").await.unwrap();
        }

        let reopened = KvStore::open(&config).unwrap();
        assert_eq!(
            reopened.get("onboardingComplete").await.unwrap(),
            Some("true".to_string())
        );
    }

    #[test]
    fn test_config_builder() {
        let config = KvConfig::new("test.db")
            .cache_capacity(32 * 1024 * 1024)
            .use_compression(false)
            .flush_every_ms(Some(1000));

        assert_eq!(config.path, "test.db");
        assert_eq!(config.cache_capacity, 32 * 1024 * 1024);
        assert!(!config.use_compression);
        assert_eq!(config.flush_every_ms, Some(1000));
    }
}
