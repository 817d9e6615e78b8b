// ============================================================================
// CAPTURE SERVICE - Foto → IA → lista local
// ============================================================================

use crate::error::ClientError;
use crate::models::FoodItem;
use crate::platform::{Camera, HttpTransport};
use crate::services::VisionClient;
use crate::state::FoodList;

pub struct CaptureService<H, C> {
    vision: VisionClient<H>,
    camera: C,
    list: FoodList,
}

impl<H: HttpTransport, C: Camera> CaptureService<H, C> {
    pub fn new(vision: VisionClient<H>, camera: C, list: FoodList) -> Self {
        Self {
            vision,
            camera,
            list,
        }
    }

    /// Captura una foto y añade los productos reconocidos
    pub async fn take_photo(&self) -> Result<Vec<FoodItem>, ClientError> {
        log::info!("📷 Abriendo cámara...");
        let image = self.camera.capture_base64().await?;
        self.food_add(&image).await
    }

    /// Reconoce los productos de la foto y los añade al final de la lista local
    pub async fn food_add(&self, image_base64: &str) -> Result<Vec<FoodItem>, ClientError> {
        let items = self.vision.extract_items(image_base64).await?;
        self.list.push(&items)?;
        Ok(items)
    }

    pub fn list(&self) -> &FoodList {
        &self.list
    }
}
