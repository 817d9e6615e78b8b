// Utils compartidos

pub mod constants;
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub mod native_ffi;

pub use constants::*;
pub use storage::*;
