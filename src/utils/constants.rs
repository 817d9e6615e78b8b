// Claves de almacenamiento
pub const TOKEN_KEY: &str = "token";
pub const FOOD_LIST_KEY: &str = "foodArr";
pub const FALLBACK_PAGE_KEY: &str = "fallbackPage";

// Rutas de la app
pub const HOME_ROUTE: &str = "/home";
pub const LOGIN_ROUTE: &str = "/login";

pub const IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Instrucción fija enviada al modelo junto a la foto
pub const FOOD_EXTRACTION_PROMPT: &str = "Identify the food products in this photo. \
Respond with strict JSON only, no prose and no markdown. \
For a single product use {\"name\": string, \"quantity\": number, \"lifespan\": number, \"category\": \"veg\" | \"non-veg\"}. \
For several products use {\"products\": [ ...objects of that same shape... ]}. \
\"quantity\" is the number of units visible. \
\"lifespan\" is the estimated remaining shelf life in hours, taking any visible expiry date into account.";
