use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

/// Process-wide session shared by the gateway and the login page.
pub static SESSION: Lazy<Arc<SessionStore>> = Lazy::new(|| Arc::new(SessionStore::new()));

/// Holder of the bearer token used for authenticated requests and the
/// web-terminal WebSocket upgrade.
///
/// The token lives behind a read-mostly lock: the gateway reads it on every
/// call, while writes only happen on login and teardown. The token is kept
/// in memory only; nothing is persisted across page loads.
#[derive(Debug, Default)]
pub struct SessionStore {
    token: RwLock<Option<String>>,
    invalidations: AtomicUsize,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = Some(token.into());
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().unwrap_or_else(|e| e.into_inner()).is_some()
    }

    /// Drop the token on logout.
    pub fn clear(&self) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// Session teardown on an unauthenticated response: clear the token and
    /// record the event. Called by the gateway only.
    pub fn invalidate(&self) {
        self.clear();
        self.invalidations.fetch_add(1, Ordering::SeqCst);
        log::warn!("session invalidated, credentials cleared");
    }

    /// Number of teardown events, used to assert the teardown runs exactly
    /// once per unauthenticated response.
    pub fn invalidations(&self) -> usize {
        self.invalidations.load(Ordering::SeqCst)
    }
}

/// Send the browser back to the login page. Outside a browser this only
/// logs, which keeps the gateway logic testable on the host.
pub fn redirect_to_login() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href("/login") {
                log::error!("failed to redirect to login: {err:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    log::warn!("redirect to /login requested");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_read_back() {
        let session = SessionStore::new();
        assert!(!session.is_authenticated());
        session.set_token("tok-1");
        assert_eq!(session.token(), Some("tok-1".to_string()));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_clear_drops_token() {
        let session = SessionStore::new();
        session.set_token("tok-1");
        session.clear();
        assert_eq!(session.token(), None);
        assert_eq!(session.invalidations(), 0);
    }

    #[test]
    fn test_invalidate_clears_and_counts() {
        let session = SessionStore::new();
        session.set_token("tok-1");
        session.invalidate();
        assert_eq!(session.token(), None);
        assert_eq!(session.invalidations(), 1);
    }
}
