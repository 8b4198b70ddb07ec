//! Application-wide constants shared by client and server.

/// Shoes released within this many days of "now" count as new releases.
/// The boundary day itself is included.
pub const NEW_RELEASE_WINDOW_DAYS: i64 = 30;

/// Currency symbol used by price formatting. Prices are stored in cents of
/// a single, consistent currency.
pub const CURRENCY_SYMBOL: &str = "$";

/// Vertical gap between the card image and the text rows, in pixels.
pub const CARD_SPACER_PX: u32 = 12;
