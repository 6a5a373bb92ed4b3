// src/auth/sessions.rs
use crate::auth::token::{generate_session_token, hash_token, hashes_equal};
use crate::domain::Session;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{info, warn};

pub const SESSION_COOKIE: &str = "session";

/// Manager sessions, keyed by the SHA-256 of the cookie token.
pub struct SessionRegistry {
    passcode: Option<String>,
    ttl_secs: i64,
    sessions: Mutex<HashMap<[u8; 32], i64>>,
}

impl SessionRegistry {
    pub fn new(passcode: Option<String>, ttl_secs: i64) -> Self {
        Self {
            passcode: passcode.filter(|p| !p.is_empty()),
            ttl_secs,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    pub fn requires_passcode(&self) -> bool {
        self.passcode.is_some()
    }

    /// Starts a manager session and returns the raw cookie token, or `None`
    /// when the passcode does not match.
    pub fn login(&self, passcode: &str, now: i64) -> Option<String> {
        if let Some(expected) = &self.passcode {
            if !hashes_equal(&hash_token(passcode), &hash_token(expected)) {
                warn!("manager login rejected: wrong passcode");
                return None;
            }
        } else {
            warn!("manager login accepted without passcode (none configured)");
        }

        let token = generate_session_token();
        let expires_at = now + self.ttl_secs;
        let mut sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        sessions.retain(|_, exp| *exp > now);
        sessions.insert(hash_token(&token), expires_at);
        info!(expires_at, "manager session started");
        Some(token)
    }

    pub fn logout(&self, raw_token: &str) {
        let mut sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        if sessions.remove(&hash_token(raw_token)).is_some() {
            info!("manager session ended");
        }
    }

    pub fn resolve(&self, raw_token: Option<&str>, now: i64) -> Session {
        let Some(token) = raw_token.filter(|t| !t.is_empty()) else {
            return Session::Anonymous;
        };
        let sessions = self.sessions.lock().unwrap_or_else(|e| e.into_inner());
        match sessions.get(&hash_token(token)) {
            Some(expires_at) if *expires_at > now => Session::Manager,
            _ => Session::Anonymous,
        }
    }
}

/// Pulls the session token out of a `Cookie` header value.
pub fn session_token_from_cookies(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then_some(value)
    })
}

pub fn session_cookie(token: &str, ttl_secs: i64) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={ttl_secs}")
}

pub fn cleared_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
