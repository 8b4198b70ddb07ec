//! Shoe Catalog Viewer - Main Entry Point
//!
//! This file configures the server with Axum routes and Dioxus application.
//! Uses dioxus::serve() pattern for dx serve compatibility.

use shoe_catalog_viewer::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    // IMPORTANT: Use dioxus::server::axum, NOT axum directly
    use dioxus::server::axum::routing::get;

    // Set panic hook to print full backtrace
    std::panic::set_hook(Box::new(|panic_info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        eprintln!("\n=== PANIC CAUGHT ===");
        eprintln!("Panic info: {}", panic_info);
        eprintln!("Backtrace:\n{}", backtrace);
        eprintln!("=== END PANIC ===\n");
    }));

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Shoe Catalog Viewer...");

    use shoe_catalog_viewer::handlers::{get_shoe_handler, list_shoes_handler};

    // NO #[tokio::main] - dioxus::serve creates its own runtime
    dioxus::serve(|| {
        async move {
            // Get the base Dioxus router
            // NOTE: Axum 0.8 uses {param} syntax instead of :param
            let router = dioxus::server::router(App)
                // Catalog routes (stateless)
                .route("/api/shoes", get(list_shoes_handler))
                .route("/api/shoes/{slug}", get(get_shoe_handler))
                .layer(tower_http::trace::TraceLayer::new_for_http());

            Ok(router)
        }
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] Shoe Catalog Viewer - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
