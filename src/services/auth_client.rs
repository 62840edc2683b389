// ============================================================================
// AUTH CLIENT - SOLO COMUNICACIÓN HTTP con el colaborador de identidad
// ============================================================================
// NO tiene lógica de sesión: el SessionStore decide qué publicar.
// Cada operación es una petición única con dos desenlaces (Ok/Err).
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::RequestCredentials;

use crate::config::CONFIG;
use crate::models::auth::{
    ApiErrorBody, SessionResponse, SignInRequest, SignInResponse, SignUpRequest,
    SocialSignInRequest, SocialSignInResponse, UpdateUserRequest,
};
use crate::models::user::User;
use crate::utils::storage;

/// Header de respuesta del colaborador con el token bearer
const AUTH_TOKEN_HEADER: &str = "set-auth-token";

/// Desenlace de un login con credenciales: usuario + token opcional
pub struct SignInOutcome {
    pub user: User,
    pub token: Option<String>,
}

fn endpoint(path: &str) -> String {
    format!("{}/{}", CONFIG.auth_base_url(), path)
}

/// Adjunta cookies same-origin y, si existe, la credencial bearer.
/// La credencial nunca se inspecciona: solo se reenvía.
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.credentials(RequestCredentials::Include);
    match storage::load_credential() {
        Some(credential) => builder.header("Authorization", &format!("Bearer {}", credential.token)),
        None => builder,
    }
}

/// Mensaje de error de una respuesta no-2xx: primero el cuerpo {message},
/// si no se puede parsear cae a un HTTP genérico
async fn error_message(response: Response) -> String {
    let status = response.status();
    let status_text = response.status_text();
    match response.json::<ApiErrorBody>().await {
        Ok(body) => match body.message {
            Some(message) if !message.is_empty() => message,
            _ => format!("HTTP {}: {}", status, status_text),
        },
        Err(_) => format!("HTTP {}: {}", status, status_text),
    }
}

/// Resuelve la sesión actual; Ok(None) significa "sin sesión"
pub async fn get_session() -> Result<Option<User>, String> {
    let response = with_credentials(Request::get(&endpoint("get-session")))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    // Sin sesión el cuerpo es un `null` literal
    let session = response
        .json::<Option<SessionResponse>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(session.and_then(|s| s.user))
}

/// Login con email y contraseña
pub async fn sign_in_email(email: &str, password: &str) -> Result<SignInOutcome, String> {
    let request = SignInRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    log::info!("🔐 Iniciando sesión: {}", email);

    let response = with_credentials(Request::post(&endpoint("sign-in/email")))
        .json(&request)
        .map_err(|e| format!("Serialization error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    // El token llega en el header set-auth-token; el cuerpo lo trae de respaldo
    let header_token = response.headers().get(AUTH_TOKEN_HEADER);
    let body = response
        .json::<SignInResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(SignInOutcome {
        user: body.user,
        token: header_token.or(body.token),
    })
}

/// Arranca el flujo OAuth del proveedor; devuelve la URL de redirección.
/// El desenlace real llega por redirección del navegador, fuera de este flujo.
pub async fn sign_in_social(provider: &str, callback_url: &str) -> Result<Option<String>, String> {
    let request = SocialSignInRequest {
        provider: provider.to_string(),
        callback_url: callback_url.to_string(),
    };

    log::info!("🔐 Login social con proveedor: {}", provider);

    let response = with_credentials(Request::post(&endpoint("sign-in/social")))
        .json(&request)
        .map_err(|e| format!("Serialization error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let body = response
        .json::<SocialSignInResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(body.url)
}

/// Crea una cuenta nueva; no autentica
pub async fn sign_up_email(name: &str, email: &str, password: &str) -> Result<(), String> {
    let request = SignUpRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };

    log::info!("📝 Registrando cuenta: {}", email);

    let response = with_credentials(Request::post(&endpoint("sign-up/email")))
        .json(&request)
        .map_err(|e| format!("Serialization error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

/// Cierra la sesión en el colaborador
pub async fn sign_out() -> Result<(), String> {
    let response = with_credentials(Request::post(&endpoint("sign-out")))
        .json(&serde_json::json!({}))
        .map_err(|e| format!("Serialization error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

/// Actualiza campos del perfil del usuario actual
pub async fn update_user(patch: &UpdateUserRequest) -> Result<(), String> {
    let response = with_credentials(Request::post(&endpoint("update-user")))
        .json(patch)
        .map_err(|e| format!("Serialization error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

/// Solicita el borrado de la cuenta actual
pub async fn delete_user() -> Result<(), String> {
    let response = with_credentials(Request::post(&endpoint("delete-user")))
        .json(&serde_json::json!({}))
        .map_err(|e| format!("Serialization error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}
