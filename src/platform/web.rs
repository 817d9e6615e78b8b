// ============================================================================
// WEB PLATFORM - Implementaciones sobre web_sys / gloo-net / FFI
// ============================================================================

use std::rc::Rc;

use gloo_net::http::Request;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Storage};

use crate::error::ClientError;
use crate::models::Coordinates;
use crate::platform::{
    BackButtonSource, Camera, Geolocation, HttpMethod, HttpRequest, HttpResponse, HttpTransport,
    KeyValueStore, Navigator,
};
use crate::utils::native_ffi;

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageArea {
    Local,
    Session,
}

/// localStorage / sessionStorage
pub struct WebStorage {
    area: StorageArea,
}

impl WebStorage {
    pub fn local() -> Self {
        Self { area: StorageArea::Local }
    }

    pub fn session() -> Self {
        Self { area: StorageArea::Session }
    }

    fn storage(&self) -> Result<Storage, ClientError> {
        let win = window().ok_or_else(|| ClientError::Storage("No window".to_string()))?;
        let storage = match self.area {
            StorageArea::Local => win.local_storage(),
            StorageArea::Session => win.session_storage(),
        };
        storage
            .ok()
            .flatten()
            .ok_or_else(|| ClientError::Storage(format!("{:?} storage unavailable", self.area)))
    }
}

impl KeyValueStore for WebStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ClientError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| ClientError::Storage(js_error(e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| ClientError::Storage(js_error(e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), ClientError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| ClientError::Storage(js_error(e)))
    }
}

/// Transporte HTTP sobre fetch (gloo-net)
#[derive(Clone, Default)]
pub struct GlooTransport;

impl HttpTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ClientError::Network(format!("Request build error: {}", e)))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

pub struct WebCamera;

impl Camera for WebCamera {
    async fn capture_base64(&self) -> Result<String, ClientError> {
        let value = native_ffi::take_photo_base64()
            .await
            .map_err(|e| ClientError::Platform(format!("Camera: {}", js_error(e))))?;
        value
            .as_string()
            .ok_or_else(|| ClientError::Platform("Camera returned no image".to_string()))
    }
}

pub struct WebGeolocation;

impl Geolocation for WebGeolocation {
    async fn current_position(&self) -> Result<Coordinates, ClientError> {
        let value = native_ffi::get_current_position()
            .await
            .map_err(|e| ClientError::Platform(format!("Geolocation: {}", js_error(e))))?;
        match (
            native_ffi::read_f64(&value, "latitude"),
            native_ffi::read_f64(&value, "longitude"),
        ) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates { latitude, longitude }),
            _ => Err(ClientError::Platform("Geolocation returned no coordinates".to_string())),
        }
    }
}

pub struct WebNavigator;

impl Navigator for WebNavigator {
    fn current_url(&self) -> String {
        window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }

    fn goto(&self, path: &str, replace_state: bool) {
        if let Err(e) = native_ffi::navigate_to(path, replace_state) {
            log::error!("❌ Navegación a {} fallida: {}", path, js_error(e));
        }
    }

    fn alert(&self, message: &str) {
        if let Some(win) = window() {
            let _ = win.alert_with_message(message);
        }
    }

    fn exit_app(&self) {
        native_ffi::exit_app();
    }
}

pub struct WebBackButton;

impl BackButtonSource for WebBackButton {
    fn subscribe(&self, handler: Rc<dyn Fn()>) -> Result<(), ClientError> {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        native_ffi::add_back_button_listener(closure.as_ref().unchecked_ref())
            .map_err(|e| ClientError::Platform(js_error(e)))?;
        // El listener vive toda la app; solo se registra una vez
        closure.forget();
        Ok(())
    }
}
