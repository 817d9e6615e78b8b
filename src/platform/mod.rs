// Plataforma: traits comunes + implementaciones específicas

#[cfg(target_arch = "wasm32")]
pub mod web;

pub mod memory;
pub mod traits;

pub use memory::MemoryStore;
pub use traits::*;
