pub mod store;

pub use store::{find_shoe, load_catalog};
