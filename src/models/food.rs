use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum FoodCategory {
    #[serde(rename = "veg")]
    Veg,
    #[serde(rename = "non-veg")]
    NonVeg,
}

impl FoodCategory {
    /// Acepta las variantes que suelen devolver el modelo y el backend
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "veg" | "vegetarian" | "vegan" => Some(FoodCategory::Veg),
            "non-veg" | "non_veg" | "nonveg" | "non-vegetarian" => Some(FoodCategory::NonVeg),
            _ => None,
        }
    }
}

/// El backend guarda la categoría como texto libre (a menudo "")
fn lenient_category<'de, D>(deserializer: D) -> Result<Option<FoodCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(FoodCategory::parse))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

/// Acepta números JSON y números en texto ("2", "1.5")
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawNumber::deserialize(deserializer)? {
        RawNumber::Number(value) => Ok(value),
        RawNumber::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid number: {:?}", text))),
    }
}

/// Los enteros se envían sin decimales (el backend guarda `int`)
fn compact_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Producto del inventario (extraído por IA o introducido a mano)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct FoodItem {
    /// Asignado por el backend; nunca se envía al crear
    #[serde(default, skip_serializing)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(deserialize_with = "lenient_number", serialize_with = "compact_number")]
    pub quantity: f64,
    /// Vida útil restante estimada, en horas
    #[serde(deserialize_with = "lenient_number", serialize_with = "compact_number")]
    pub lifespan: f64,
    #[serde(default, deserialize_with = "lenient_category", skip_serializing_if = "Option::is_none")]
    pub category: Option<FoodCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl FoodItem {
    pub fn new(name: impl Into<String>, quantity: impl Into<f64>, lifespan: impl Into<f64>) -> Self {
        Self {
            id: None,
            name: name.into(),
            quantity: quantity.into(),
            lifespan: lifespan.into(),
            category: None,
            longitude: None,
            latitude: None,
            tags: None,
        }
    }

    pub fn with_category(mut self, category: FoodCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_location(mut self, coordinates: Coordinates) -> Self {
        self.longitude = Some(coordinates.longitude);
        self.latitude = Some(coordinates.latitude);
        self
    }
}

#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Debug)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Respuesta del backend para /food: `{ message, data }`
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct FoodEnvelope<T> {
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}
