// ============================================================================
// FOODSHARE CLIENT - Núcleo del cliente móvil (RUST + WASM)
// ============================================================================
// - Platform: traits de los colaboradores externos (storage, cámara, GPS...)
// - Services: flujos (auth, captura con IA, publicación, botón atrás)
// - State: token de sesión + lista local
// - Models: estructuras compartidas con backend y modelo de visión
// ============================================================================

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod platform;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{FoodShareApp, Platform};
pub use config::{AppConfig, CONFIG};
pub use error::ClientError;

#[cfg(target_arch = "wasm32")]
pub use web_entry::*;

/// Funciones exportadas a JavaScript. Cada flujo registra y descarta sus errores.
#[cfg(target_arch = "wasm32")]
mod web_entry {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::app::{FoodShareApp, Platform};
    use crate::config::CONFIG;
    use crate::models::{FoodItem, LoginRequest, RegisterRequest};
    use crate::platform::web::{
        GlooTransport, WebBackButton, WebCamera, WebGeolocation, WebNavigator, WebStorage,
    };

    type WebApp = FoodShareApp<GlooTransport, WebCamera, WebGeolocation>;

    // Instancia global de la app (WASM es single-thread)
    thread_local! {
        static APP: RefCell<Option<Rc<WebApp>>> = RefCell::new(None);
    }

    fn app() -> Option<Rc<WebApp>> {
        let app = APP.with(|cell| cell.borrow().clone());
        if app.is_none() {
            log::warn!("⚠️ App no está inicializada");
        }
        app
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
        log::info!("🚀 FoodShare client starting...");

        let app = FoodShareApp::new(
            &CONFIG,
            Platform {
                transport: GlooTransport,
                camera: WebCamera,
                geolocation: WebGeolocation,
                local: Rc::new(WebStorage::local()),
                session: Rc::new(WebStorage::session()),
                navigator: Rc::new(WebNavigator),
            },
        );
        // Único listener global del botón atrás
        app.start(&WebBackButton).map_err(js_error)?;

        APP.with(|cell| *cell.borrow_mut() = Some(Rc::new(app)));
        Ok(())
    }

    /// Guarda la página actual como destino del botón atrás
    #[wasm_bindgen(js_name = handleBackButton)]
    pub fn handle_back_button(fallback_url: &str) {
        if let Some(app) = app() {
            app.navigation.visit(fallback_url);
        }
    }

    #[wasm_bindgen(js_name = setToken)]
    pub fn set_token(token: &str) {
        if let Some(app) = app() {
            if let Err(e) = app.auth.set_token(token) {
                log::error!("❌ Error guardando token: {}", e);
            }
        }
    }

    #[wasm_bindgen(js_name = checkUser)]
    pub fn check_user() {
        let Some(app) = app() else { return };
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = app.auth.check_user().await {
                log::error!("❌ checkUser: {}", e);
            }
        });
    }

    #[wasm_bindgen]
    pub fn logout() {
        if let Some(app) = app() {
            app.auth.logout();
        }
    }

    #[wasm_bindgen]
    pub fn login(email: String, password: String) {
        let Some(app) = app() else { return };
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = app.auth.login(LoginRequest { email, password }).await {
                log::error!("❌ login: {}", e);
            }
        });
    }

    #[wasm_bindgen]
    pub fn signup(name: String, email: String, password: String) {
        let Some(app) = app() else { return };
        wasm_bindgen_futures::spawn_local(async move {
            let registration = RegisterRequest {
                name,
                email,
                password,
            };
            if let Err(e) = app.auth.signup(registration).await {
                log::error!("❌ signup: {}", e);
            }
        });
    }

    #[wasm_bindgen(js_name = takePhoto)]
    pub fn take_photo() {
        let Some(app) = app() else { return };
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = app.capture.take_photo().await {
                log::error!("❌ takePhoto: {}", e);
            }
        });
    }

    #[wasm_bindgen(js_name = foodAdd)]
    pub fn food_add(image_base64: String) {
        let Some(app) = app() else { return };
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = app.capture.food_add(&image_base64).await {
                log::error!("❌ foodAdd: {}", e);
            }
        });
    }

    /// Lista local como JSON (`[]` si no hay nada)
    #[wasm_bindgen(js_name = getArr)]
    pub fn get_arr() -> String {
        let items = app().map(|app| app.food_list().get_arr()).unwrap_or_default();
        serde_json::to_string(&items).unwrap_or_else(|_| "[]".to_string())
    }

    fn js_error(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    fn ready_app() -> Result<Rc<WebApp>, JsValue> {
        app().ok_or_else(|| JsValue::from_str("App not initialized"))
    }

    /// Producto remoto por id, como JSON (Promise)
    #[wasm_bindgen(js_name = getFood)]
    pub async fn get_food(id: u32) -> Result<String, JsValue> {
        let app = ready_app()?;
        let item = app.food.get_food(u64::from(id)).await.map_err(|e| {
            log::error!("❌ getFood: {}", e);
            js_error(e)
        })?;
        serde_json::to_string(&item).map_err(js_error)
    }

    /// Todos los productos del backend, como JSON (Promise)
    #[wasm_bindgen(js_name = listFoods)]
    pub async fn list_foods() -> Result<String, JsValue> {
        let app = ready_app()?;
        let items = app.food.list_foods().await.map_err(|e| {
            log::error!("❌ listFoods: {}", e);
            js_error(e)
        })?;
        serde_json::to_string(&items).map_err(js_error)
    }

    /// Publica un producto (JSON de `FoodItem`) con la ubicación actual
    #[wasm_bindgen(js_name = addFood)]
    pub fn add_food(item_json: String) {
        let Some(app) = app() else { return };
        wasm_bindgen_futures::spawn_local(async move {
            let item: FoodItem = match serde_json::from_str(&item_json) {
                Ok(item) => item,
                Err(e) => {
                    log::error!("❌ addFood: producto inválido: {}", e);
                    return;
                }
            };
            if let Err(e) = app.food.add_food(item).await {
                log::error!("❌ addFood: {}", e);
            }
        });
    }
}
