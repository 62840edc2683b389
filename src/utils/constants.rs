/// Clave de localStorage para la credencial bearer.
/// Slot único de proceso: solo el SessionStore escribe aquí.
pub const STORAGE_KEY_CREDENTIAL: &str = "quotationPortal_bearerToken";
