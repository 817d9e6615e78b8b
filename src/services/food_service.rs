// ============================================================================
// FOOD SERVICE - Publicación de productos con geolocalización
// ============================================================================

use std::rc::Rc;

use crate::error::ClientError;
use crate::models::FoodItem;
use crate::platform::{Geolocation, HttpTransport, Navigator};
use crate::services::ApiClient;
use crate::state::TokenStore;

#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Guardado en el backend (con el id asignado si lo devolvió)
    Accepted(FoodItem),
    Rejected(String),
}

pub struct FoodService<H, G> {
    api: ApiClient<H>,
    tokens: TokenStore,
    geolocation: G,
    navigator: Rc<dyn Navigator>,
}

impl<H: HttpTransport, G: Geolocation> FoodService<H, G> {
    pub fn new(
        api: ApiClient<H>,
        tokens: TokenStore,
        geolocation: G,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            tokens,
            geolocation,
            navigator,
        }
    }

    fn token(&self) -> Result<String, ClientError> {
        self.tokens.get()?.ok_or(ClientError::NotAuthenticated)
    }

    /// Añade la ubicación actual y publica el producto; no toca la lista local
    pub async fn add_food(&self, item: FoodItem) -> Result<Submission, ClientError> {
        let token = self.token()?;
        let position = self.geolocation.current_position().await?;
        let item = item.with_location(position);

        match self.api.create_food(&token, &item).await {
            Ok(envelope) => {
                log::info!("✅ Producto publicado: {}", item.name);
                self.navigator.alert("Food added successfully");
                Ok(Submission::Accepted(envelope.data))
            }
            Err(ClientError::Http { status, message }) => {
                log::error!("❌ Error publicando {} ({}): {}", item.name, status, message);
                self.navigator.alert(&format!("Could not add food: {}", message));
                Ok(Submission::Rejected(message))
            }
            Err(e) => Err(e),
        }
    }

    pub async fn get_food(&self, id: u64) -> Result<FoodItem, ClientError> {
        let token = self.token()?;
        Ok(self.api.get_food(&token, id).await?.data)
    }

    pub async fn list_foods(&self) -> Result<Vec<FoodItem>, ClientError> {
        let token = self.token()?;
        let foods = self.api.list_foods(&token).await?.data;
        log::info!("📋 {} productos en el backend", foods.len());
        Ok(foods)
    }
}
