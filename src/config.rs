use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub app_origin: String,
    pub enable_logging: bool,
    pub vision: VisionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:3000/api/v1".to_string(),
            app_origin: "https://localhost".to_string(),
            enable_logging: true,
            vision: VisionConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: String,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-1.5-flash".to_string(),
            api_key: String::new(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url),
            app_origin: option_env!("APP_ORIGIN")
                .map(str::to_string)
                .unwrap_or(defaults.app_origin),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            vision: VisionConfig {
                endpoint: option_env!("GEMINI_ENDPOINT")
                    .map(str::to_string)
                    .unwrap_or(defaults.vision.endpoint),
                model: option_env!("GEMINI_MODEL")
                    .map(str::to_string)
                    .unwrap_or(defaults.vision.model),
                api_key: option_env!("GEMINI_API_KEY")
                    .unwrap_or("").to_string(),
            },
        }
    }

    /// Páginas raíz: el botón atrás cierra la app en lugar de navegar
    pub fn root_urls(&self) -> Vec<String> {
        let origin = self.app_origin.trim_end_matches('/');
        vec![format!("{}/", origin), format!("{}/home", origin)]
    }

    /// Nivel máximo de log según `enable_logging`
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
