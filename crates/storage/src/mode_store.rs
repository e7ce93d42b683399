//! Mode Store
//!
//! Typed access to the five persisted session keys on top of an injected
//! [`KeyValueStore`]. Writes are independent: there is no transaction across
//! keys, so readers tolerate partially written state and repair it (see
//! [`ModeStore::resolve_experience_mode`]).

use crate::app_state::{AccountKind, ExperienceMode, InterestSet, SessionParams};
use crate::kv::{KeyValueStore, Result};
use std::sync::Arc;
use tracing::{debug, warn};

/// Storage keys
pub mod keys {
    /// Experience mode (`green` / `thread`)
    pub const EXPERIENCE_MODE: &str = "userExperience";
    /// Account kind (`individual` / `entity`)
    pub const ACCOUNT_KIND: &str = "accountType";
    /// Interest tags as a JSON array
    pub const INTERESTS: &str = "userInterests";
    /// Onboarding completion flag (`true`)
    pub const ONBOARDING_COMPLETE: &str = "onboardingComplete";
    /// Bearer token for the API client
    pub const AUTH_TOKEN: &str = "authToken";
}

const FLAG_TRUE: &str = "true";

/// Typed facade over the session keys
#[derive(Clone)]
pub struct ModeStore {
    kv: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for ModeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModeStore").finish_non_exhaustive()
    }
}

impl ModeStore {
    /// Create a mode store over a key-value backend
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// The underlying key-value store
    pub fn backend(&self) -> &Arc<dyn KeyValueStore> {
        &self.kv
    }

    // -------------------------------------------------------------------------
    // Experience mode
    // -------------------------------------------------------------------------

    /// Read the stored experience mode
    ///
    /// A value outside the enum domain reads as absent.
    pub async fn experience_mode(&self) -> Result<Option<ExperienceMode>> {
        self.parse_key(keys::EXPERIENCE_MODE).await
    }

    /// Persist the experience mode
    pub async fn set_experience_mode(&self, mode: ExperienceMode) -> Result<()> {
        self.kv.set(keys::EXPERIENCE_MODE, mode.as_str()).await
    }

    /// Resolve the experience mode, repairing the store if needed
    ///
    /// Read failures count as absent. An absent or invalid mode resolves to
    /// [`ExperienceMode::Green`] and that default is written back, so the next
    /// read is a hit. Only a failed write of the default is returned.
    pub async fn resolve_experience_mode(&self) -> Result<ExperienceMode> {
        let stored = match self.experience_mode().await {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, "failed to read experience mode, treating as absent");
                None
            }
        };

        if let Some(mode) = stored {
            return Ok(mode);
        }

        let mode = ExperienceMode::default();
        warn!(mode = %mode, "no experience mode stored, persisting default");
        self.set_experience_mode(mode).await?;
        Ok(mode)
    }

    // -------------------------------------------------------------------------
    // Account kind
    // -------------------------------------------------------------------------

    /// Read the stored account kind
    pub async fn account_kind(&self) -> Result<Option<AccountKind>> {
        self.parse_key(keys::ACCOUNT_KIND).await
    }

    /// Persist the account kind
    pub async fn set_account_kind(&self, kind: AccountKind) -> Result<()> {
        self.kv.set(keys::ACCOUNT_KIND, kind.as_str()).await
    }

    // -------------------------------------------------------------------------
    // Interests
    // -------------------------------------------------------------------------

    /// Read the stored interest set
    pub async fn interests(&self) -> Result<Option<InterestSet>> {
        match self.kv.get(keys::INTERESTS).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Persist the interest set
    pub async fn set_interests(&self, interests: &InterestSet) -> Result<()> {
        let json = serde_json::to_string(interests)?;
        self.kv.set(keys::INTERESTS, &json).await
    }

    // -------------------------------------------------------------------------
    // Onboarding flag
    // -------------------------------------------------------------------------

    /// Whether onboarding has been completed
    pub async fn onboarding_complete(&self) -> Result<bool> {
        Ok(self.kv.get(keys::ONBOARDING_COMPLETE).await?.as_deref() == Some(FLAG_TRUE))
    }

    /// Set the completion flag
    pub async fn mark_onboarding_complete(&self) -> Result<()> {
        self.kv.set(keys::ONBOARDING_COMPLETE, FLAG_TRUE).await
    }

    // -------------------------------------------------------------------------
    // Auth token
    // -------------------------------------------------------------------------

    /// Read the bearer token
    pub async fn auth_token(&self) -> Result<Option<String>> {
        self.kv.get(keys::AUTH_TOKEN).await
    }

    /// Persist the bearer token
    pub async fn set_auth_token(&self, token: &str) -> Result<()> {
        self.kv.set(keys::AUTH_TOKEN, token).await
    }

    /// Evict the bearer token
    pub async fn clear_auth_token(&self) -> Result<()> {
        self.kv.remove(keys::AUTH_TOKEN).await
    }

    // -------------------------------------------------------------------------
    // Session recovery
    // -------------------------------------------------------------------------

    /// Rebuild session params from a completed onboarding
    ///
    /// Returns `None` when onboarding is incomplete, the account kind is
    /// missing, or the store cannot be read. A completed onboarding always
    /// has a mode: a missing one is resolved to the default and persisted.
    pub async fn restore_session(&self) -> Option<SessionParams> {
        let restored = async {
            if !self.onboarding_complete().await? {
                return Ok::<_, crate::kv::KvError>(None);
            }
            let Some(kind) = self.account_kind().await? else {
                return Ok(None);
            };
            let mode = self.resolve_experience_mode().await?;
            Ok(Some(SessionParams::new(mode, kind)))
        }
        .await;

        match restored {
            Ok(params) => {
                debug!(?params, "restored session params");
                params
            }
            Err(e) => {
                warn!(error = %e, "failed to restore session, starting onboarding");
                None
            }
        }
    }

    /// Remove all onboarding keys; the auth token is kept
    pub async fn reset(&self) -> Result<()> {
        for key in [
            keys::ONBOARDING_COMPLETE,
            keys::EXPERIENCE_MODE,
            keys::ACCOUNT_KIND,
            keys::INTERESTS,
        ] {
            self.kv.remove(key).await?;
        }
        Ok(())
    }

    async fn parse_key<T: std::str::FromStr>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.kv.get(key).await? else {
            return Ok(None);
        };
        match raw.parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                warn!(key, value = %raw, "ignoring invalid stored value");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::{KvError, MemoryStore, MockKeyValueStore};

    fn memory_store() -> (MemoryStore, ModeStore) {
        let kv = MemoryStore::new();
        let store = ModeStore::new(Arc::new(kv.clone()));
        (kv, store)
    }

    #[tokio::test]
    async fn test_experience_mode_round_trip() {
        let (_, store) = memory_store();
        assert_eq!(store.experience_mode().await.unwrap(), None);

        store.set_experience_mode(ExperienceMode::Thread).await.unwrap();
        assert_eq!(store.experience_mode().await.unwrap(), Some(ExperienceMode::Thread));
    }

    #[tokio::test]
    async fn test_set_experience_mode_is_idempotent() {
        let (kv, store) = memory_store();

        store.set_experience_mode(ExperienceMode::Thread).await.unwrap();
        let once = kv.snapshot().await;

        store.set_experience_mode(ExperienceMode::Thread).await.unwrap();
        assert_eq!(kv.snapshot().await, once);
    }

    #[tokio::test]
    async fn test_resolve_defaults_and_persists_on_miss() {
        let (kv, store) = memory_store();

        let mode = store.resolve_experience_mode().await.unwrap();
        assert_eq!(mode, ExperienceMode::Green);

        // Subsequent read is a hit
        assert_eq!(
            kv.get(keys::EXPERIENCE_MODE).await.unwrap(),
            Some("green".to_string())
        );
        assert_eq!(store.experience_mode().await.unwrap(), Some(ExperienceMode::Green));
    }

    #[tokio::test]
    async fn test_resolve_keeps_existing_mode() {
        let (_, store) = memory_store();
        store.set_experience_mode(ExperienceMode::Thread).await.unwrap();
        assert_eq!(store.resolve_experience_mode().await.unwrap(), ExperienceMode::Thread);
    }

    #[tokio::test]
    async fn test_resolve_repairs_invalid_value() {
        let (kv, store) = memory_store();
        kv.set(keys::EXPERIENCE_MODE, "purple").await.unwrap();

        assert_eq!(store.experience_mode().await.unwrap(), None);
        assert_eq!(store.resolve_experience_mode().await.unwrap(), ExperienceMode::Green);
        assert_eq!(
            kv.get(keys::EXPERIENCE_MODE).await.unwrap(),
            Some("green".to_string())
        );
    }

    #[tokio::test]
    async fn test_resolve_treats_read_error_as_absent() {
        let mut kv = MockKeyValueStore::new();
        kv.expect_get()
            .times(1)
            .returning(|_| Err(KvError::Backend("read failed".to_string())));
        kv.expect_set()
            .times(1)
            .returning(|key, value| {
                assert_eq!(key, keys::EXPERIENCE_MODE);
                assert_eq!(value, "green");
                Ok(())
            });

        let store = ModeStore::new(Arc::new(kv));
        assert_eq!(store.resolve_experience_mode().await.unwrap(), ExperienceMode::Green);
    }

    #[tokio::test]
    async fn test_resolve_surfaces_write_failure() {
        let mut kv = MockKeyValueStore::new();
        kv.expect_get().returning(|_| Ok(None));
        kv.expect_set()
            .returning(|_, _| Err(KvError::Backend("disk full".to_string())));

        let store = ModeStore::new(Arc::new(kv));
        assert!(matches!(
            store.resolve_experience_mode().await,
            Err(KvError::Backend(_))
        ));
    }

    #[tokio::test]
    async fn test_account_kind_and_interests() {
        let (_, store) = memory_store();
        store.set_account_kind(AccountKind::Entity).await.unwrap();
        assert_eq!(store.account_kind().await.unwrap(), Some(AccountKind::Entity));

        let interests: InterestSet = ["books", "music", "travel"].into_iter().collect();
        store.set_interests(&interests).await.unwrap();
        assert_eq!(store.interests().await.unwrap(), Some(interests));
    }

    #[tokio::test]
    async fn test_corrupt_interests_is_an_error() {
        let (kv, store) = memory_store();
        kv.set(keys::INTERESTS, "not json").await.unwrap();
        assert!(matches!(store.interests().await, Err(KvError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_auth_token_lifecycle() {
        let (_, store) = memory_store();
        store.set_auth_token("abc").await.unwrap();
        assert_eq!(store.auth_token().await.unwrap(), Some("abc".to_string()));

        store.clear_auth_token().await.unwrap();
        assert_eq!(store.auth_token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_restore_session_requires_completion_flag() {
        let (_, store) = memory_store();
        store.set_experience_mode(ExperienceMode::Thread).await.unwrap();
        store.set_account_kind(AccountKind::Individual).await.unwrap();
        assert_eq!(store.restore_session().await, None);

        store.mark_onboarding_complete().await.unwrap();
        assert_eq!(
            store.restore_session().await,
            Some(SessionParams::new(ExperienceMode::Thread, AccountKind::Individual))
        );
    }

    #[tokio::test]
    async fn test_restore_session_with_partial_write() {
        let (_, store) = memory_store();
        store.mark_onboarding_complete().await.unwrap();
        store.set_experience_mode(ExperienceMode::Green).await.unwrap();
        // Account kind never written
        assert_eq!(store.restore_session().await, None);
    }

    #[tokio::test]
    async fn test_restore_session_defaults_missing_mode() {
        let (kv, store) = memory_store();
        store.mark_onboarding_complete().await.unwrap();
        store.set_account_kind(AccountKind::Individual).await.unwrap();

        assert_eq!(
            store.restore_session().await,
            Some(SessionParams::new(ExperienceMode::Green, AccountKind::Individual))
        );
        assert_eq!(kv.get(keys::EXPERIENCE_MODE).await.unwrap().as_deref(), Some("green"));
    }

    #[tokio::test]
    async fn test_restore_session_repairs_invalid_mode() {
        let (kv, store) = memory_store();
        store.mark_onboarding_complete().await.unwrap();
        store.set_account_kind(AccountKind::Entity).await.unwrap();
        kv.set(keys::EXPERIENCE_MODE, "purple").await.unwrap();

        let session = store.restore_session().await.unwrap();
        assert_eq!(session.mode, ExperienceMode::Green);
        assert_eq!(kv.get(keys::EXPERIENCE_MODE).await.unwrap().as_deref(), Some("green"));
    }

    #[tokio::test]
    async fn test_restore_session_read_error() {
        let mut kv = MockKeyValueStore::new();
        kv.expect_get()
            .returning(|_| Err(KvError::Backend("unavailable".to_string())));

        let store = ModeStore::new(Arc::new(kv));
        assert_eq!(store.restore_session().await, None);
    }

    #[tokio::test]
    async fn test_reset_keeps_auth_token() {
        let (kv, store) = memory_store();
        store.set_experience_mode(ExperienceMode::Green).await.unwrap();
        store.set_account_kind(AccountKind::Individual).await.unwrap();
        store.mark_onboarding_complete().await.unwrap();
        store.set_auth_token("tok").await.unwrap();

        store.reset().await.unwrap();

        assert_eq!(
            kv.snapshot().await,
            vec![(keys::AUTH_TOKEN.to_string(), "tok".to_string())]
        );
    }
}
