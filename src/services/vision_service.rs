// ============================================================================
// VISION SERVICE - Reconocimiento de productos con el modelo multimodal
// ============================================================================
// Envía la foto + instrucción fija a `generateContent` y decodifica el JSON
// que devuelve el modelo (un producto o `{ "products": [...] }`)
// ============================================================================

use serde::Deserialize;

use crate::config::VisionConfig;
use crate::error::ClientError;
use crate::models::vision::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use crate::models::FoodItem;
use crate::platform::{HttpRequest, HttpTransport};
use crate::utils::{FOOD_EXTRACTION_PROMPT, IMAGE_MIME_TYPE};

#[derive(Clone)]
pub struct VisionClient<H> {
    config: VisionConfig,
    transport: H,
}

impl<H: HttpTransport> VisionClient<H> {
    pub fn new(config: VisionConfig, transport: H) -> Self {
        Self { config, transport }
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Devuelve el texto crudo de la respuesta del modelo
    pub async fn run_ai(&self, image_base64: &str) -> Result<String, ClientError> {
        if self.config.api_key.is_empty() {
            return Err(ClientError::Config("GEMINI_API_KEY is not set".to_string()));
        }

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![
                    Part::text(FOOD_EXTRACTION_PROMPT),
                    Part::image(IMAGE_MIME_TYPE, strip_data_url(image_base64)),
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        };

        log::info!("🤖 Enviando foto a {} ({} bytes base64)", self.config.model, image_base64.len());

        let request = HttpRequest::post(self.url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)?;
        let response = self.transport.send(request).await?;
        if !response.ok() {
            return Err(ClientError::Http {
                status: response.status,
                message: response.body,
            });
        }

        let parsed: GenerateContentResponse = response.json()?;
        parsed
            .first_text()
            .ok_or_else(|| ClientError::Extraction("model returned no text".to_string()))
    }

    /// Foto → lista de productos
    pub async fn extract_items(&self, image_base64: &str) -> Result<Vec<FoodItem>, ClientError> {
        let text = self.run_ai(image_base64).await?;
        let items = parse_extraction(&text)?;
        log::info!("🥫 {} productos reconocidos", items.len());
        Ok(items)
    }
}

/// La cámara puede devolver `data:image/jpeg;base64,...`
fn strip_data_url(image: &str) -> &str {
    match image.split_once(";base64,") {
        Some((prefix, data)) if prefix.starts_with("data:") => data,
        _ => image,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Extraction {
    Many { products: Vec<FoodItem> },
    One(FoodItem),
}

/// Decodifica la salida del modelo; un único producto se trata como lista de uno
pub fn parse_extraction(text: &str) -> Result<Vec<FoodItem>, ClientError> {
    let json = strip_code_fence(text);
    match serde_json::from_str::<Extraction>(json) {
        Ok(Extraction::Many { products }) => Ok(products),
        Ok(Extraction::One(item)) => Ok(vec![item]),
        Err(e) => Err(ClientError::Extraction(format!("{}: {}", e, truncate(json, 120)))),
    }
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.trim_end().trim_end_matches("```");
    // Salta la etiqueta de lenguaje (```json), con o sin salto de línea
    let body = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    body.trim()
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
