use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::app::components::Spacer;
use crate::app::pages::routes::Route;
use crate::domain::models::{Shoe, Variant};
use crate::shared::constants::CARD_SPACER_PX;
use crate::shared::formatting::{format_price, pluralize};

/// Everything the card displays, derived up front so the display rules are
/// testable without rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct CardPresentation {
    pub badge: Option<Variant>,
    pub price_text: String,
    /// Base price is struck through whenever a sale price supersedes it.
    pub price_is_struck: bool,
    pub sale_price_text: Option<String>,
    pub color_info: String,
}

impl CardPresentation {
    pub fn derive(shoe: &Shoe, now: DateTime<Utc>) -> Self {
        Self {
            badge: shoe.variant(now),
            price_text: format_price(shoe.price),
            price_is_struck: shoe.sale_price.is_some(),
            sale_price_text: shoe.sale_price.map(format_price),
            color_info: pluralize("Color", shoe.num_of_colors),
        }
    }
}

/// One shoe listing card. `now` comes from the page so every card in a
/// render judges recency against the same instant.
#[component]
pub fn ShoeCard(shoe: Shoe, now: DateTime<Utc>) -> Element {
    let view = CardPresentation::derive(&shoe, now);

    let badge = view
        .badge
        .map(|v| (v.label(), format!("shoe-card__badge shoe-card__badge--{}", v.class_suffix())));

    let price_class = if view.price_is_struck {
        "shoe-card__price shoe-card__price--struck"
    } else {
        "shoe-card__price"
    };

    rsx! {
        Link {
            to: Route::ShoeDetail { slug: shoe.slug.clone() },
            class: "shoe-card__link",
            article { class: "shoe-card",
                div { class: "shoe-card__image-wrapper",
                    img { class: "shoe-card__image", alt: "", src: "{shoe.image_src}" }
                }
                if let Some((label, class)) = badge {
                    span { class: "{class}", "{label}" }
                }
                Spacer { size: CARD_SPACER_PX }
                div { class: "shoe-card__row",
                    h3 { class: "shoe-card__name", "{shoe.name}" }
                    span { class: "{price_class}", "{view.price_text}" }
                }
                div { class: "shoe-card__row",
                    p { class: "shoe-card__color-info", "{view.color_info}" }
                    if let Some(sale_price) = view.sale_price_text {
                        span { class: "shoe-card__sale-price", "{sale_price}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn shoe(price: u32, sale_price: Option<u32>, release_date: DateTime<Utc>) -> Shoe {
        Shoe {
            slug: "test-shoe".to_string(),
            name: "Test Shoe".to_string(),
            image_src: "/assets/img/test-shoe.jpg".to_string(),
            price,
            sale_price,
            release_date,
            num_of_colors: 3,
        }
    }

    #[test]
    fn test_new_release_card() {
        let now = noon(2025, 6, 15);
        let view = CardPresentation::derive(&shoe(10000, None, now), now);

        assert_eq!(view.badge, Some(Variant::NewRelease));
        assert_eq!(view.badge.unwrap().label(), "Just Release");
        assert!(!view.price_is_struck);
        assert_eq!(view.sale_price_text, None);
    }

    #[test]
    fn test_sale_card_strikes_base_price() {
        let now = noon(2025, 6, 15);
        let view = CardPresentation::derive(&shoe(10000, Some(5000), now), now);

        assert_eq!(view.badge, Some(Variant::OnSale));
        assert_eq!(view.badge.unwrap().label(), "Sale");
        assert!(view.price_is_struck);
        assert_eq!(view.price_text, "$100.00");
        assert_eq!(view.sale_price_text.as_deref(), Some("$50.00"));
    }

    #[test]
    fn test_old_plain_card_has_no_badge() {
        let now = noon(2025, 6, 15);
        let released = now - Duration::days(730);
        let view = CardPresentation::derive(&shoe(10000, None, released), now);

        assert_eq!(view.badge, None);
        assert!(!view.price_is_struck);
        assert_eq!(view.sale_price_text, None);
        assert_eq!(view.color_info, "3 Colors");
    }
}
