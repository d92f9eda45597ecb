use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Account role. Anything the backend sends besides `admin` is treated as a regular user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    User,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub last_login: Option<NaiveDateTime>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Username for display, falling back to the numeric id.
    pub fn display_name(&self) -> String {
        if self.username.is_empty() {
            format!("user #{}", self.id)
        } else {
            self.username.clone()
        }
    }
}

/// An authenticated session. Token and user only ever exist together.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub current_user: User,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_decodes_with_only_id_and_role() {
        let user: User = serde_json::from_str(r#"{"id": 1, "role": "user"}"#).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.role, Role::User);
        assert!(user.username.is_empty());
        assert_eq!(user.display_name(), "user #1");
    }

    #[test]
    fn unknown_role_is_treated_as_user() {
        let user: User = serde_json::from_str(r#"{"id": 4, "role": "auditor"}"#).unwrap();
        assert!(!user.is_admin());
    }

    #[test]
    fn user_decodes_backend_timestamps() {
        let user: User = serde_json::from_str(
            r#"{"id": 2, "username": "admin", "email": "admin@parkingapp.com", "role": "admin",
                "created_at": "2024-05-01T09:30:00.123456", "last_login": null}"#,
        )
        .unwrap();
        assert!(user.is_admin());
        assert_eq!(
            user.created_at.map(|t| t.format("%Y-%m-%d %H:%M").to_string()),
            Some("2024-05-01 09:30".to_string())
        );
        assert_eq!(user.last_login, None);
    }
}
