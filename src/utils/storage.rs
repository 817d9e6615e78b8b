use serde::{de::DeserializeOwned, Serialize};

use crate::error::ClientError;
use crate::platform::KeyValueStore;

pub fn save_to_storage<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), ClientError> {
    let json = serde_json::to_string(value)?;
    store.set_item(key, &json)
}

/// Lectura estricta: `Ok(None)` solo si no existe o está vacío
pub fn try_load_from_storage<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, ClientError> {
    match store.get_item(key)? {
        Some(json) if !json.trim().is_empty() => Ok(Some(serde_json::from_str(&json)?)),
        _ => Ok(None),
    }
}

/// Lee y decodifica un valor JSON; `None` si no existe, está vacío o es inválido
pub fn load_from_storage<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    match try_load_from_storage(store, key) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("⚠️ Valor ilegible en '{}', se ignora: {}", key, e);
            None
        }
    }
}

pub fn remove_from_storage(store: &dyn KeyValueStore, key: &str) -> Result<(), ClientError> {
    store.remove_item(key)
}
