// ============================================================================
// FOOD LIST - Lista local de productos (JSON bajo una clave fija)
// ============================================================================

use std::rc::Rc;

use crate::error::ClientError;
use crate::models::FoodItem;
use crate::platform::KeyValueStore;
use crate::utils::{load_from_storage, save_to_storage, try_load_from_storage, FOOD_LIST_KEY};

#[derive(Clone)]
pub struct FoodList {
    store: Rc<dyn KeyValueStore>,
}

impl FoodList {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Lista actual; vacía si no hay nada guardado
    pub fn get_arr(&self) -> Vec<FoodItem> {
        load_from_storage(&*self.store, FOOD_LIST_KEY).unwrap_or_default()
    }

    /// Añade al final, conservando el orden existente.
    /// Si la lista guardada no se puede leer no se sobrescribe.
    pub fn push(&self, items: &[FoodItem]) -> Result<(), ClientError> {
        if items.is_empty() {
            return Ok(());
        }
        let mut list: Vec<FoodItem> = try_load_from_storage(&*self.store, FOOD_LIST_KEY)?.unwrap_or_default();
        list.extend_from_slice(items);
        save_to_storage(&*self.store, FOOD_LIST_KEY, &list)?;
        log::info!("💾 {} productos añadidos a la lista local ({} en total)", items.len(), list.len());
        Ok(())
    }
}
