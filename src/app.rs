// ============================================================================
// APP - Composición de servicios sobre los colaboradores de plataforma
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::error::ClientError;
use crate::platform::{BackButtonSource, Camera, Geolocation, HttpTransport, KeyValueStore, Navigator};
use crate::services::{
    ApiClient, AuthService, CaptureService, FoodService, NavigationController, VisionClient,
};
use crate::state::{FoodList, TokenStore};

/// Colaboradores inyectados
pub struct Platform<H, C, G> {
    pub transport: H,
    pub camera: C,
    pub geolocation: G,
    /// Storage persistente (token + lista local)
    pub local: Rc<dyn KeyValueStore>,
    /// Storage de sesión (página de fallback)
    pub session: Rc<dyn KeyValueStore>,
    pub navigator: Rc<dyn Navigator>,
}

pub struct FoodShareApp<H, C, G> {
    pub auth: AuthService<H>,
    pub capture: CaptureService<H, C>,
    pub food: FoodService<H, G>,
    pub navigation: Rc<NavigationController>,
}

impl<H, C, G> FoodShareApp<H, C, G>
where
    H: HttpTransport + Clone,
    C: Camera,
    G: Geolocation,
{
    pub fn new(config: &AppConfig, platform: Platform<H, C, G>) -> Self {
        let Platform {
            transport,
            camera,
            geolocation,
            local,
            session,
            navigator,
        } = platform;

        let api = ApiClient::new(&config.backend_url, transport.clone());
        let tokens = TokenStore::new(local.clone());
        let vision = VisionClient::new(config.vision.clone(), transport);

        Self {
            auth: AuthService::new(api.clone(), tokens.clone(), navigator.clone()),
            capture: CaptureService::new(vision, camera, FoodList::new(local)),
            food: FoodService::new(api, tokens, geolocation, navigator.clone()),
            navigation: Rc::new(NavigationController::new(session, navigator, config.root_urls())),
        }
    }

    /// Arranque: registra el único listener del botón atrás
    pub fn start(&self, back_button: &dyn BackButtonSource) -> Result<(), ClientError> {
        self.navigation.install(back_button)
    }

    pub fn food_list(&self) -> &FoodList {
        self.capture.list()
    }
}
