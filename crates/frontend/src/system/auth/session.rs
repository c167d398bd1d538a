use contracts::system::auth::ClientAccount;
use leptos::prelude::*;

use super::storage;

/// Explicit session object, created once at app start and provided via
/// context to whichever component needs the current user identity.
#[derive(Clone, Copy)]
pub struct Session {
    pub account: RwSignal<Option<ClientAccount>>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            account: RwSignal::new(None),
        }
    }

    /// Populate from persisted storage; absence or corruption means
    /// logged out, never a fatal error.
    pub fn restore(&self) {
        if let Some(account) = storage::load_user() {
            log::debug!("Session restored for client {}", account.id);
            self.account.set(Some(account));
        }
    }

    /// Publish and persist the account returned by a successful login.
    pub fn login(&self, account: ClientAccount) {
        storage::save_user(&account);
        self.account.set(Some(account));
    }

    pub fn logout(&self) {
        storage::clear_user();
        self.account.set(None);
    }

    /// Id of the logged-in client, if any.
    pub fn client_id(&self) -> Option<i64> {
        self.account.with(|a| a.as_ref().map(|c| c.id))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the session provided by `App`.
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session not found in component tree")
}
