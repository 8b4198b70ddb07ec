// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod shoe;

pub use shoe::{resolve_variant, Shoe, Variant};
