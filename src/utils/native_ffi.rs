// ============================================================================
// NATIVE BRIDGE FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Wrappers para los plugins nativos (cámara, GPS, App) expuestos en window
// por el shell de la app - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Resuelve con el JPEG capturado en base64
    #[wasm_bindgen(catch, js_name = takePhotoBase64)]
    pub async fn take_photo_base64() -> Result<JsValue, JsValue>;

    /// Resuelve con `{ latitude, longitude }`
    #[wasm_bindgen(catch, js_name = getCurrentPosition)]
    pub async fn get_current_position() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = addBackButtonListener)]
    pub fn add_back_button_listener(callback: &js_sys::Function) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = exitApp)]
    pub fn exit_app();

    /// Router del shell (goto con replaceState)
    #[wasm_bindgen(catch, js_name = navigateTo)]
    pub fn navigate_to(path: &str, replace_state: bool) -> Result<(), JsValue>;
}

/// Helper: leer un número de un objeto JS
pub fn read_f64(value: &JsValue, field: &str) -> Option<f64> {
    js_sys::Reflect::get(value, &JsValue::from_str(field))
        .ok()
        .and_then(|v| v.as_f64())
}
