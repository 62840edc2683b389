use serde::{Deserialize, Serialize};

use crate::models::user::User;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Petición de login social; el colaborador espera `callbackURL` en camelCase
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SocialSignInRequest {
    pub provider: String,
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SocialSignInResponse {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub redirect: bool,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SignInResponse {
    #[serde(default)]
    pub token: Option<String>,
    pub user: User,
}

/// Cuerpo de `get-session`; el colaborador responde `null` sin sesión,
/// por eso se decodifica como `Option<SessionResponse>`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SessionResponse {
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

/// Token bearer persistido en localStorage, con marca de tiempo de guardado
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct StoredCredential {
    pub token: String,
    pub saved_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn social_request_uses_camel_case_callback() {
        let request = SocialSignInRequest {
            provider: "google".to_string(),
            callback_url: "http://localhost:3000/dashboard".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["provider"], "google");
        assert_eq!(json["callbackURL"], "http://localhost:3000/dashboard");
    }

    #[test]
    fn null_session_body_decodes_as_none() {
        let session: Option<SessionResponse> = serde_json::from_str("null").unwrap();
        assert!(session.is_none());
    }

    #[test]
    fn session_body_with_user_decodes() {
        let json = r#"{"user":{"id":"u1","name":"Ana","email":"a@b.com"},"session":{"expiresAt":"2026-01-01"}}"#;
        let session: Option<SessionResponse> = serde_json::from_str(json).unwrap();
        let user = session.unwrap().user.unwrap();
        assert_eq!(user.email, "a@b.com");
    }

    #[test]
    fn error_body_tolerates_missing_fields() {
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());

        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"bad cost"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("bad cost"));
    }

    #[test]
    fn update_request_skips_absent_fields() {
        let patch = UpdateUserRequest { name: None };
        assert_eq!(serde_json::to_string(&patch).unwrap(), "{}");

        let patch = UpdateUserRequest {
            name: Some("Bob".to_string()),
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"name":"Bob"}"#);
    }
}
