pub mod constants;
pub mod errors;
pub mod formatting;

// Server-only logging module
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
