use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

use crate::models::auth::StoredCredential;
use crate::utils::constants::STORAGE_KEY_CREDENTIAL;

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando datos: {}", e))?;
    storage.set_item(key, &json)
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = get_local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage.remove_item(key)
        .map_err(|_| "Error eliminando de localStorage".to_string())?;
    Ok(())
}

/// Persiste el token bearer con marca de tiempo de guardado
pub fn save_credential(token: &str) -> Result<(), String> {
    let credential = StoredCredential {
        token: token.to_string(),
        saved_at: chrono::Utc::now().to_rfc3339(),
    };
    save_to_storage(STORAGE_KEY_CREDENTIAL, &credential)?;
    log::info!("💾 Credencial guardada");
    Ok(())
}

/// Recupera la credencial persistida, si existe
pub fn load_credential() -> Option<StoredCredential> {
    let credential = load_from_storage::<StoredCredential>(STORAGE_KEY_CREDENTIAL)?;

    if let Ok(saved) = chrono::DateTime::parse_from_rfc3339(&credential.saved_at) {
        let age = chrono::Utc::now().signed_duration_since(saved.with_timezone(&chrono::Utc));
        log::debug!("🔑 Credencial guardada hace {} minutos", age.num_minutes());
    }

    Some(credential)
}

/// Limpia el slot de credencial (logout o cuenta eliminada)
pub fn clear_credential() {
    let _ = remove_from_storage(STORAGE_KEY_CREDENTIAL);
}
