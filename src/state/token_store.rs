// ============================================================================
// TOKEN STORE - Slot único del token de sesión
// ============================================================================

use std::rc::Rc;

use crate::error::ClientError;
use crate::platform::KeyValueStore;
use crate::utils::TOKEN_KEY;

#[derive(Clone)]
pub struct TokenStore {
    store: Rc<dyn KeyValueStore>,
}

impl TokenStore {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Token guardado; un valor vacío cuenta como ausente
    pub fn get(&self) -> Result<Option<String>, ClientError> {
        Ok(self
            .store
            .get_item(TOKEN_KEY)?
            .filter(|token| !token.is_empty()))
    }

    pub fn set(&self, token: &str) -> Result<(), ClientError> {
        self.store.set_item(TOKEN_KEY, token)
    }

    pub fn clear(&self) -> Result<(), ClientError> {
        self.store.remove_item(TOKEN_KEY)
    }
}
