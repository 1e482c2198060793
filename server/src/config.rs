//! Server configuration
//!
//! Configuration is loaded from environment variables.

use std::env;
use std::time::Duration;

/// Main server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub host: String,
    /// Server port
    pub port: u16,

    /// Session configuration
    pub session: SessionConfig,
}

/// Session-related configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Name of the browser cookie holding the session token
    pub cookie_name: String,
    /// Sliding session lifetime
    pub max_duration: Duration,
    /// Advisory cap on concurrent sessions
    pub max_sessions: usize,
    /// Interval between expired-session sweeps
    pub cleanup_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            session: SessionConfig::default(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "todo_session".to_string(),
            max_duration: Duration::from_secs(24 * 60 * 60), // 24 hours
            max_sessions: 1000,
            cleanup_interval: Duration::from_secs(60),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Server config
        if let Ok(host) = env::var("HOST") {
            config.host = host;
        }
        if let Ok(port) = env::var("PORT")
            && let Ok(p) = port.parse()
        {
            config.port = p;
        }

        // Session config
        if let Ok(name) = env::var("SESSION_COOKIE_NAME")
            && !name.is_empty()
        {
            config.session.cookie_name = name;
        }
        if let Ok(val) = env::var("SESSION_MAX_DURATION_HOURS")
            && let Ok(hours) = val.parse::<u64>()
        {
            config.session.max_duration = Duration::from_secs(hours * 60 * 60);
        }
        if let Ok(val) = env::var("MAX_CONCURRENT_SESSIONS")
            && let Ok(v) = val.parse()
        {
            config.session.max_sessions = v;
        }
        if let Ok(val) = env::var("SESSION_CLEANUP_INTERVAL_SECS")
            && let Ok(secs) = val.parse::<u64>()
        {
            config.session.cleanup_interval = Duration::from_secs(secs);
        }

        config
    }
}
