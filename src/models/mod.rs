pub mod auth;
pub mod food;
pub mod vision;

pub use auth::{AuthResponse, ErrorBody, LoginRequest, RegisterRequest, UserId, UserProfile, VerifyResponse};
pub use food::{Coordinates, FoodCategory, FoodEnvelope, FoodItem};
