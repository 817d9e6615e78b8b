// ============================================================================
// PLATFORM TRAITS - Colaboradores externos (storage, cámara, GPS, navegación)
// ============================================================================
// Los servicios reciben estas dependencias inyectadas; en WASM se usan las
// implementaciones de `platform::web`, en tests los dobles de `testing`.
// ============================================================================

use std::rc::Rc;

use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::models::Coordinates;

/// Almacenamiento clave/valor (localStorage, sessionStorage, secure storage)
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, ClientError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), ClientError>;

    fn remove_item(&self, key: &str) -> Result<(), ClientError>;
}

/// Navegación del lado cliente + diálogos y ciclo de vida de la app
pub trait Navigator {
    /// URL completa de la página actual
    fn current_url(&self) -> String;

    fn goto(&self, path: &str, replace_state: bool);

    fn alert(&self, message: &str);

    fn exit_app(&self);
}

/// Fuente del evento de botón atrás del hardware
pub trait BackButtonSource {
    fn subscribe(&self, handler: Rc<dyn Fn()>) -> Result<(), ClientError>;
}

#[allow(async_fn_in_trait)]
pub trait Camera {
    /// Captura una foto JPEG y la devuelve en base64
    async fn capture_base64(&self) -> Result<String, ClientError>;
}

#[allow(async_fn_in_trait)]
pub trait Geolocation {
    async fn current_position(&self) -> Result<Coordinates, ClientError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            ..Self::get(url)
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn bearer(self, token: &str) -> Self {
        self.header("Authorization", &format!("Bearer {}", token))
    }

    pub fn json<T: serde::Serialize>(self, body: &T) -> Result<Self, ClientError> {
        let body = serde_json::to_string(body)?;
        let mut request = self.header("Content-Type", "application/json");
        request.body = Some(body);
        Ok(request)
    }

    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Transporte HTTP (gloo-net en WASM)
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError>;
}
