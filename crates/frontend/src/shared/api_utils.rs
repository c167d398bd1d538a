//! API utilities for frontend-backend communication.

/// Base URL for API requests.
///
/// Built from the current window location, with the backend listening on
/// port 8080 under the `/api` prefix. Returns an empty string when no
/// window is available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8080/api", protocol, hostname)
}
