pub mod common;
pub mod shoe_card;
pub mod spacer;

pub use common::{EmptyState, ErrorMessage, LoadingText};
pub use shoe_card::{CardPresentation, ShoeCard};
pub use spacer::Spacer;
