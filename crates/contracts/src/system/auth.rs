use serde::{Deserialize, Serialize};

/// Credentials sent to POST /auth/login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Authenticated client account as returned by the backend and persisted
/// locally between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientAccount {
    pub id: i64,
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub prenom: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub profile_type: String,
}

impl ClientAccount {
    /// "Nom Prénom" for the header display.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nom, self.prenom).trim().to_string()
    }
}

/// Login response envelope. `client` is only present on success; `message`
/// carries the server-provided failure reason when there is one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub client: Option<ClientAccount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_defaults() {
        let resp: LoginResponse = serde_json::from_str("{}").unwrap();
        assert!(!resp.success);
        assert!(resp.message.is_none());
        assert!(resp.client.is_none());
    }

    #[test]
    fn test_client_account_round_trip() {
        let json = r#"{
            "id": 7,
            "nom": "El Amrani",
            "prenom": "Yassine",
            "email": "abd@gmail.com",
            "profileType": "CLIENT"
        }"#;
        let account: ClientAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.id, 7);
        assert_eq!(account.profile_type, "CLIENT");
        assert_eq!(account.full_name(), "El Amrani Yassine");

        let back = serde_json::to_value(&account).unwrap();
        assert_eq!(back["profileType"], "CLIENT");
    }
}
