pub mod shoes;

pub use shoes::{get_shoe_handler, list_shoes_handler};
