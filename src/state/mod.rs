// ============================================================================
// STATE MODULE - Estado persistido (token de sesión + lista local)
// ============================================================================

pub mod food_list;
pub mod token_store;

pub use food_list::FoodList;
pub use token_store::TokenStore;
