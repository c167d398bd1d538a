use contracts::system::auth::{ClientAccount, LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Login with email and password.
///
/// Surfaces the server-provided message on a rejected login, with a generic
/// French fallback when the server gives none.
pub async fn login(email: String, password: String) -> Result<ClientAccount, String> {
    let request = LoginRequest { email, password };

    let response = Request::post(&format!("{}/auth/login", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    let body: LoginResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if body.success {
        body.client
            .ok_or_else(|| "Réponse de connexion invalide".to_string())
    } else {
        Err(body
            .message
            .unwrap_or_else(|| "Erreur de connexion".to_string()))
    }
}
