// ============================================================================
// ERRORES DEL CLIENTE
// ============================================================================

use thiserror::Error;

/// Error común a todos los servicios del cliente
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    /// Respuesta no-2xx del backend, con el mensaje que devolvió el servidor
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// El modelo devolvió algo que no es un producto ni una lista de productos
    #[error("Could not extract food items: {0}")]
    Extraction(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("No session token stored")]
    NotAuthenticated,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Http { status: 401, .. })
    }
}
