//! Credential persistence and session bootstrap.
//!
//! The browser client keeps its bearer credential in local storage and
//! attaches it to every call; this module abstracts that storage so the
//! rest of the client is host-agnostic. A 401 from the API clears the
//! stored credential (see [`crate::api::ApiClient`]), which is the signal
//! to send the user back through login.

use std::sync::RwLock;

/// Storage for the bearer credential (browser local-storage analog).
pub trait CredentialStore: Send + Sync {
    /// The stored credential, if any.
    fn load(&self) -> Option<String>;
    /// Replace the stored credential.
    fn save(&self, token: &str);
    /// Drop the stored credential.
    fn clear(&self);
}

/// In-memory credential store.
pub struct MemoryCredentialStore {
    token: RwLock<Option<String>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            token: RwLock::new(None),
        }
    }

    /// Create a store seeded with a credential.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(Some(token.to_owned())),
        }
    }
}

impl Default for MemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    fn save(&self, token: &str) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }
}

/// Result of session bootstrap at application start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    /// A credential is present; proceed to the dashboard.
    Authenticated,
    /// No credential; route to the login flow.
    NeedsLogin,
}

/// Inspect the credential store and decide where the app starts.
pub fn bootstrap(store: &dyn CredentialStore) -> Session {
    if store.load().is_some() {
        Session::Authenticated
    } else {
        Session::NeedsLogin
    }
}
