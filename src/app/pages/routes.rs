//! Application routes and pages.
//!
//! Two pages: the shoe grid at `/` and a detail view per shoe. Each page
//! reads the clock once and threads that instant into every card, so one
//! render never straddles the new-release boundary.

use chrono::{DateTime, Utc};
use dioxus::document;
use dioxus::prelude::*;

use crate::app::components::{EmptyState, ErrorMessage, LoadingText, ShoeCard};
use crate::app::layouts::Navbar;
use crate::domain::models::Shoe;
use crate::server_fns::{get_shoe, get_shoes};
use crate::shared::formatting::{format_price, pluralize};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    // Landing page - shoe grid
    #[route("/")]
    Home {},

    #[route("/shoe/:slug")]
    ShoeDetail { slug: String },
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Dioxus App initialized successfully");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    // Use asset!() macro to ensure CSS is bundled and served correctly
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            Navbar {}

            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    // Use server function to load the catalog - the ? propagates suspense
    let shoes_resource = use_server_future(|| async move { get_shoes().await })?;

    // One clock read per render, shared by every card
    let now = Utc::now();

    let content = match &*shoes_resource.read() {
        Some(Ok(shoes)) => {
            if shoes.is_empty() {
                rsx! {
                    EmptyState {
                        icon: "👟".to_string(),
                        title: "No shoes yet".to_string(),
                        description: "The catalog is empty. Check back soon.".to_string(),
                    }
                }
            } else {
                rsx! {
                    div { class: "shoe-grid",
                        for shoe in shoes.iter().cloned() {
                            ShoeCard { key: "{shoe.slug}", shoe, now }
                        }
                    }
                }
            }
        }
        Some(Err(e)) => {
            rsx! {
                ErrorMessage { message: format!("Failed to load the catalog: {}", e) }
            }
        }
        None => {
            rsx! {
                LoadingText { message: "Loading the catalog...".to_string() }
            }
        }
    };

    rsx! {
        section { class: "shoe-grid-page",
            h2 { class: "shoe-grid-page__title", "All Shoes" }
            {content}
        }
    }
}

#[component]
pub fn ShoeDetail(slug: String) -> Element {
    let slug_clone = slug.clone();
    let shoe_resource = use_server_future(move || {
        let s = slug_clone.clone();
        async move { get_shoe(s).await }
    })?;

    let now = Utc::now();

    let content = match &*shoe_resource.read() {
        Some(Ok(Some(shoe))) => rsx! {
            ShoeDetailView { shoe: shoe.clone(), now }
        },
        Some(Ok(None)) => rsx! {
            EmptyState {
                icon: "👟".to_string(),
                title: "Shoe not found".to_string(),
                description: "No shoe matches this link.".to_string(),
            }
        },
        Some(Err(e)) => rsx! {
            ErrorMessage { message: format!("Failed to load this shoe: {}", e) }
        },
        None => rsx! {
            LoadingText { message: "Loading shoe...".to_string() }
        },
    };

    rsx! {
        section { class: "shoe-detail",
            {content}
        }
    }
}

#[component]
fn ShoeDetailView(shoe: Shoe, now: DateTime<Utc>) -> Element {
    let badge = shoe
        .variant(now)
        .map(|v| (v.label(), format!("shoe-detail__badge shoe-detail__badge--{}", v.class_suffix())));

    let price_text = format_price(shoe.price);
    let sale_price_text = shoe.sale_price.map(format_price);
    let color_info = pluralize("Color", shoe.num_of_colors);
    let released = shoe.release_date.format("%B %-d, %Y").to_string();

    let price_class = if sale_price_text.is_some() {
        "shoe-detail__price shoe-detail__price--struck"
    } else {
        "shoe-detail__price"
    };

    rsx! {
        article { class: "shoe-detail__card",
            div { class: "shoe-detail__image-wrapper",
                img { class: "shoe-detail__image", alt: "", src: "{shoe.image_src}" }
                if let Some((label, class)) = badge {
                    span { class: "{class}", "{label}" }
                }
            }
            div { class: "shoe-detail__info",
                h2 { class: "shoe-detail__name", "{shoe.name}" }
                div { class: "shoe-detail__prices",
                    span { class: "{price_class}", "{price_text}" }
                    if let Some(sale_price) = sale_price_text {
                        span { class: "shoe-detail__sale-price", "{sale_price}" }
                    }
                }
                p { class: "shoe-detail__colors", "{color_info}" }
                p { class: "shoe-detail__released", "Released {released}" }
            }
        }
    }
}
