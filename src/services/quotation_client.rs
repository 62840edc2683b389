// ============================================================================
// QUOTATION CLIENT - mutación contra la API de cotizaciones
// ============================================================================
// Exactamente una petición por invocación, sin reintentos ni cache.
// ============================================================================

use gloo_net::http::{Request, Response};
use web_sys::RequestCredentials;

use crate::config::CONFIG;
use crate::models::auth::ApiErrorBody;
use crate::models::quotation::NewQuotationRequest;
use crate::utils::storage;

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

/// Crea una cotización. La credencial bearer identifica al usuario y el
/// transporte incluye la cookie de sesión same-origin.
pub async fn create_quotation(request: &NewQuotationRequest) -> Result<(), String> {
    let url = format!("{}/api/quotation/new-quotation", CONFIG.quotation_api_url());

    let mut builder = Request::post(&url).credentials(RequestCredentials::Include);
    if let Some(credential) = storage::load_credential() {
        builder = builder.header("Authorization", &format!("Bearer {}", credential.token));
    }

    log::info!("📤 Enviando cotización: {}", request.name);

    let response = builder
        .json(request)
        .map_err(|e| format!("Serialization error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let message = error_message(response).await;
        log::error!("❌ Error creando cotización: {}", message);
        return Err(message);
    }

    log::info!("✅ Cotización creada");
    Ok(())
}
