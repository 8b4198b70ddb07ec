use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::constants::NEW_RELEASE_WINDOW_DAYS;

/// Badge category for a catalog item.
///
/// There are 3 display states, resolved from the shoe record:
///   - `Some(OnSale)` for any shoe carrying a sale price
///   - `Some(NewRelease)` for shoes released within the lookback window
///   - `None` for everything else (no badge)
///
/// A shoe can be both on sale and recently released; on-sale wins and is
/// the variant used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    OnSale,
    NewRelease,
}

impl Variant {
    /// Badge copy shown on the card.
    pub fn label(&self) -> &'static str {
        match self {
            Variant::OnSale => "Sale",
            Variant::NewRelease => "Just Release",
        }
    }

    /// BEM modifier suffix for badge styling.
    pub fn class_suffix(&self) -> &'static str {
        match self {
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
        }
    }
}

/// One shoe listing as served by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shoe {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    /// Base price in cents.
    pub price: u32,
    /// Sale price in cents. Presence of the field is what puts the shoe on
    /// sale; a value of 0 still counts (free promotions).
    #[serde(default)]
    pub sale_price: Option<u32>,
    pub release_date: DateTime<Utc>,
    pub num_of_colors: u32,
}

impl Shoe {
    pub fn variant(&self, now: DateTime<Utc>) -> Option<Variant> {
        resolve_variant(self.sale_price, self.release_date, now)
    }
}

/// Resolve the badge variant for a shoe.
///
/// `now` is an explicit parameter so callers decide the evaluation instant;
/// the function itself never touches the clock. The recency check uses the
/// signed whole-day difference, so a future `release_date` (negative
/// difference) counts as new. The window boundary is inclusive.
pub fn resolve_variant(
    sale_price: Option<u32>,
    release_date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Option<Variant> {
    if sale_price.is_some() {
        Some(Variant::OnSale)
    } else if is_new_release(release_date, now) {
        Some(Variant::NewRelease)
    } else {
        None
    }
}

fn is_new_release(release_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    (now - release_date).num_days() <= NEW_RELEASE_WINDOW_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_sale_price_wins_over_recent_release() {
        let now = at(2025, 6, 15);
        assert_eq!(
            resolve_variant(Some(4900), at(2025, 6, 14), now),
            Some(Variant::OnSale)
        );
    }

    #[test]
    fn test_sale_price_wins_regardless_of_release_date() {
        let now = at(2025, 6, 15);
        // Far in the past and in the future - sale status still dominates
        assert_eq!(
            resolve_variant(Some(4900), at(1999, 1, 1), now),
            Some(Variant::OnSale)
        );
        assert_eq!(
            resolve_variant(Some(4900), at(2030, 1, 1), now),
            Some(Variant::OnSale)
        );
    }

    #[test]
    fn test_zero_sale_price_counts_as_on_sale() {
        // Presence of the field decides, not the value
        let now = at(2025, 6, 15);
        assert_eq!(
            resolve_variant(Some(0), at(1999, 1, 1), now),
            Some(Variant::OnSale)
        );
    }

    #[test]
    fn test_recent_release_is_new() {
        let now = at(2025, 6, 15);
        assert_eq!(
            resolve_variant(None, now, now),
            Some(Variant::NewRelease)
        );
        assert_eq!(
            resolve_variant(None, now - Duration::days(7), now),
            Some(Variant::NewRelease)
        );
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        let now = at(2025, 6, 15);
        let released = now - Duration::days(NEW_RELEASE_WINDOW_DAYS);
        assert_eq!(
            resolve_variant(None, released, now),
            Some(Variant::NewRelease)
        );
    }

    #[test]
    fn test_one_day_past_window_is_not_new() {
        let now = at(2025, 6, 15);
        let released = now - Duration::days(NEW_RELEASE_WINDOW_DAYS + 1);
        assert_eq!(resolve_variant(None, released, now), None);
    }

    #[test]
    fn test_future_release_date_is_new() {
        // Not-yet-released shoes show the new-release badge
        let now = at(2025, 6, 15);
        assert_eq!(
            resolve_variant(None, now + Duration::days(90), now),
            Some(Variant::NewRelease)
        );
    }

    #[test]
    fn test_old_release_without_sale_has_no_badge() {
        let now = at(2025, 6, 15);
        assert_eq!(resolve_variant(None, at(2023, 6, 15), now), None);
    }

    #[test]
    fn test_variant_labels() {
        assert_eq!(Variant::OnSale.label(), "Sale");
        assert_eq!(Variant::NewRelease.label(), "Just Release");
    }

    #[test]
    fn test_variant_class_suffixes() {
        assert_eq!(Variant::OnSale.class_suffix(), "on-sale");
        assert_eq!(Variant::NewRelease.class_suffix(), "new-release");
    }
}
