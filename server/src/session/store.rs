use crate::session::state::{
    SessionData, SessionId, generate_session_token, now_millis, validate_session_token,
};
use metrics::{counter, gauge};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Session store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Sliding expiry: a session lives this long past its last access
    pub max_duration: Duration,
    /// Advisory cap on live sessions; exceeding it is logged, not refused
    pub max_sessions: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_duration: Duration::from_secs(24 * 60 * 60), // 24 hours
            max_sessions: 1000,
        }
    }
}

struct SessionEntry {
    data: SessionData,
    expires_at: u64,
}

/// Session store: maps cookie tokens to per-browser state.
///
/// Every read and write of session data goes through [`SessionStore::update`],
/// which holds the write lock for the whole closure. Two racing requests for
/// the same browser therefore serialize instead of losing updates.
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionId, SessionEntry>>,
    config: StoreConfig,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Resolve the session for an incoming request.
    ///
    /// A well-formed, known, unexpired token is reused and its expiry
    /// refreshed. Anything else (no cookie, malformed token, unknown token,
    /// expired entry) mints a fresh empty session. Returns the token and
    /// whether it is newly minted, in which case the caller must set the
    /// cookie on the response.
    pub async fn open(&self, existing: Option<&str>) -> (SessionId, bool) {
        let mut sessions = self.sessions.write().await;
        let now = now_millis();

        if let Some(token) = existing
            && validate_session_token(token)
            && let Some(entry) = sessions.get_mut(token)
        {
            if entry.expires_at > now {
                entry.expires_at = now + self.config.max_duration.as_millis() as u64;
                return (token.to_string(), false);
            }
            debug!("Session {} expired, replacing", token);
            sessions.remove(token);
        }

        if sessions.len() >= self.config.max_sessions {
            warn!(
                "Session count {} at or above limit {}",
                sessions.len(),
                self.config.max_sessions
            );
        }

        let token = generate_session_token();
        sessions.insert(
            token.clone(),
            SessionEntry {
                data: SessionData::default(),
                expires_at: now + self.config.max_duration.as_millis() as u64,
            },
        );
        counter!("todolist_sessions_created_total").increment(1);
        debug!("Created session {}", token);

        (token, true)
    }

    /// Run `f` against the session's data under the write lock.
    ///
    /// Returns `None` when the token is unknown (the entry expired between
    /// `open` and here, or the caller skipped `open`).
    pub async fn update<F, R>(&self, id: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut SessionData) -> R,
    {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(id)?;
        Some(f(&mut entry.data))
    }

    /// Drop sessions whose expiry has passed. Driven by a background task.
    pub async fn cleanup_expired(&self) {
        let now = now_millis();
        let mut sessions = self.sessions.write().await;

        let expired: Vec<SessionId> = sessions
            .iter()
            .filter(|(_, entry)| entry.expires_at <= now)
            .map(|(id, _)| id.clone())
            .collect();

        for id in expired {
            info!("Removing expired session: {}", id);
            sessions.remove(&id);
            counter!("todolist_sessions_expired_total").increment(1);
        }

        gauge!("todolist_sessions_active").set(sessions.len() as f64);
    }

    /// Get count of live sessions
    pub async fn session_count(&self) -> usize {
        let sessions = self.sessions.read().await;
        sessions.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::mutate;

    #[tokio::test]
    async fn test_open_without_cookie_mints_session() {
        let store = SessionStore::new();
        let (token, created) = store.open(None).await;

        assert!(created);
        assert!(validate_session_token(&token));
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_open_reuses_known_token() {
        let store = SessionStore::new();
        let (token, _) = store.open(None).await;

        let (again, created) = store.open(Some(&token)).await;
        assert!(!created);
        assert_eq!(again, token);
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_open_rejects_bogus_token() {
        let store = SessionStore::new();
        let (token, created) = store.open(Some("not-a-real-token")).await;

        assert!(created);
        assert_ne!(token, "not-a-real-token");
    }

    #[tokio::test]
    async fn test_update_roundtrips_state() {
        let store = SessionStore::new();
        let (token, _) = store.open(None).await;

        store
            .update(&token, |data| {
                mutate::create_list(&mut data.lists, "Groceries").unwrap();
            })
            .await
            .unwrap();

        let count = store.update(&token, |data| data.lists.len()).await.unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_update_unknown_token_is_none() {
        let store = SessionStore::new();
        let result = store.update("missing", |data| data.lists.len()).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_expired_session_is_replaced() {
        let config = StoreConfig {
            max_duration: Duration::from_millis(1),
            max_sessions: 1000,
        };
        let store = SessionStore::with_config(config);
        let (token, _) = store.open(None).await;

        tokio::time::sleep(Duration::from_millis(5)).await;

        let (fresh, created) = store.open(Some(&token)).await;
        assert!(created);
        assert_ne!(fresh, token);
    }

    #[tokio::test]
    async fn test_cleanup_expired_sessions() {
        let config = StoreConfig {
            max_duration: Duration::from_millis(1),
            max_sessions: 1000,
        };
        let store = SessionStore::with_config(config);
        store.open(None).await;

        tokio::time::sleep(Duration::from_millis(5)).await;
        store.cleanup_expired().await;

        assert_eq!(store.session_count().await, 0);
    }
}
