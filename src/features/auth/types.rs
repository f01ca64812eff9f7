//! Request and response types for the auth API. These payloads carry
//! credentials and one-time codes, so they must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SendOtpRequest {
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct VerifyOtpResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Identity provider selector for `sign_in`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SignInKind {
    Credentials,
    Google,
}

#[derive(Clone, Debug, Serialize)]
pub struct SignInRequest {
    pub provider: SignInKind,
    pub email: String,
    pub password: String,
}

/// Generic `{error?}` envelope returned by most mutation endpoints.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct ApiStatus {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Session summary returned by the API to hydrate auth state.
/// This mirrors cookie-backed session state and contains no secrets.
pub struct UserSession {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    pub role: String,
}

impl UserSession {
    /// Name to greet the user with, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_password_request_uses_camel_case_field() {
        let request = ResetPasswordRequest {
            email: "a@x.com".to_string(),
            new_password: "hunter22".to_string(),
        };

        let json = serde_json::to_string(&request).expect("Failed to serialize");
        assert!(json.contains("newPassword"));
        assert!(!json.contains("new_password"));
    }

    #[test]
    fn verify_otp_response_defaults_to_failure() {
        let response: VerifyOtpResponse = serde_json::from_str("{}").expect("Failed to deserialize");
        assert!(!response.success);
        assert_eq!(response.error, None);
    }

    #[test]
    fn user_session_display_name_falls_back_to_email() {
        let mut session = UserSession {
            id: "u1".to_string(),
            name: Some("Ada".to_string()),
            email: "ada@x.com".to_string(),
            role: "user".to_string(),
        };
        assert_eq!(session.display_name(), "Ada");

        session.name = Some("   ".to_string());
        assert_eq!(session.display_name(), "ada@x.com");

        session.name = None;
        assert_eq!(session.display_name(), "ada@x.com");
    }

    #[test]
    fn sign_in_kind_serializes_snake_case() {
        let json = serde_json::to_string(&SignInKind::Credentials).expect("Failed to serialize");
        assert_eq!(json, "\"credentials\"");
    }
}
