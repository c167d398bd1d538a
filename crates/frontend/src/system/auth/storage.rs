use contracts::system::auth::ClientAccount;
use web_sys::window;

const USER_KEY: &str = "amana_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the authenticated account to localStorage.
pub fn save_user(account: &ClientAccount) {
    if let Some(storage) = get_local_storage() {
        if let Ok(json) = serde_json::to_string(account) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

/// Restore the persisted account. A missing or corrupt value reads as
/// "not logged in"; corrupt values are removed so they are not retried.
pub fn load_user() -> Option<ClientAccount> {
    let storage = get_local_storage()?;
    let raw = storage.get_item(USER_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(account) => Some(account),
        Err(e) => {
            log::warn!("Discarding corrupt persisted user: {}", e);
            let _ = storage.remove_item(USER_KEY);
            None
        }
    }
}

/// Clear the persisted account.
pub fn clear_user() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(USER_KEY);
    }
}
