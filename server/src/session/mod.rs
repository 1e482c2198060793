//! Cookie-backed session storage
//!
//! This module provides:
//! - `SessionData` for per-browser state (lists plus a one-shot flash)
//! - `SessionStore` mapping cookie tokens to `SessionData`
//! - token generation and validation helpers

pub mod state;
pub mod store;

pub use state::{Flash, FlashKind, SessionData, SessionId};
pub use store::{SessionStore, StoreConfig};
