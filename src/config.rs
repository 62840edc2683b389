use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub auth_base_url: String,
    pub quotation_api_url: String,
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth_base_url: "http://localhost:3000/api/auth".to_string(),
            quotation_api_url: "http://localhost:8558".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            auth_base_url: option_env!("AUTH_BASE_URL")
                .unwrap_or("http://localhost:3000/api/auth")
                .to_string(),
            quotation_api_url: option_env!("QUOTATION_API_URL")
                .unwrap_or("http://localhost:8558")
                .to_string(),
            environment: option_env!("ENVIRONMENT").unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
        }
    }

    /// URL base del colaborador de autenticación (sin barra final)
    pub fn auth_base_url(&self) -> &str {
        self.auth_base_url.trim_end_matches('/')
    }

    /// URL base de la API de cotizaciones (sin barra final)
    pub fn quotation_api_url(&self) -> &str {
        self.quotation_api_url.trim_end_matches('/')
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
