//! Per-browser session state and token helpers

use crate::todo::TodoList;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Session token carried in the browser cookie
pub type SessionId = String;

/// Charset for session tokens: lowercase base32 (a-z, 2-7) to avoid 0/1 confusion
const SESSION_TOKEN_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz234567";
const SESSION_TOKEN_LENGTH: usize = 26;

/// Generate a random session token
pub fn generate_session_token() -> SessionId {
    use std::collections::hash_map::RandomState;
    use std::hash::{BuildHasher, Hasher};

    let mut token = String::with_capacity(SESSION_TOKEN_LENGTH);
    let hasher = RandomState::new();

    // Use multiple hash sources for randomness
    for i in 0..SESSION_TOKEN_LENGTH {
        let mut h = hasher.build_hasher();
        h.write_usize(i);
        h.write_u128(
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos(),
        );
        h.write_u128(Uuid::new_v4().as_u128());

        let idx = (h.finish() as usize) % SESSION_TOKEN_CHARSET.len();
        token.push(SESSION_TOKEN_CHARSET[idx] as char);
    }

    token
}

/// Check a cookie value has the shape of a token we could have minted
pub fn validate_session_token(token: &str) -> bool {
    if token.len() != SESSION_TOKEN_LENGTH {
        return false;
    }
    token
        .chars()
        .all(|c| SESSION_TOKEN_CHARSET.contains(&(c as u8)))
}

/// Get current timestamp in milliseconds
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Kind of one-shot status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

/// One-shot status message shown on the next rendered page, then cleared
#[derive(Debug, Clone)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

/// Everything the server remembers for one browser
#[derive(Debug, Default)]
pub struct SessionData {
    /// Ordered list collection; positions double as list identifiers
    pub lists: Vec<TodoList>,
    flash: Option<Flash>,
}

impl SessionData {
    pub fn set_flash(&mut self, flash: Flash) {
        self.flash = Some(flash);
    }

    /// Return the pending flash and clear it (one render cycle only)
    pub fn take_flash(&mut self) -> Option<Flash> {
        self.flash.take()
    }
}
