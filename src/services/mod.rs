pub mod api_client;
pub mod auth_service;
pub mod capture_service;
pub mod food_service;
pub mod navigation_controller;
pub mod vision_service;

pub use api_client::ApiClient;
pub use auth_service::{AuthOutcome, AuthService, UserCheck};
pub use capture_service::CaptureService;
pub use food_service::{FoodService, Submission};
pub use navigation_controller::{BackAction, NavigationController};
pub use vision_service::{parse_extraction, VisionClient};
