//! Server functions for Dioxus Fullstack
//! These functions run on the server and are callable from the client

use dioxus::prelude::*;

use crate::domain::models::Shoe;

// ============================================================
// Catalog Cache (server-side only)
// ============================================================
mod cache {
    use dashmap::DashMap;
    use once_cell::sync::Lazy;
    use std::time::{Duration, Instant};

    /// Cached catalog with timestamp for TTL
    pub struct CachedCatalog {
        pub shoes: Vec<crate::domain::models::Shoe>,
        pub cached_at: Instant,
    }

    /// Cache key: catalog source path
    pub type CacheKey = String;

    /// Global cache for the parsed catalog (thread-safe)
    /// TTL: 5 minutes - after that, re-read from disk to pick up edits
    pub static CATALOG_CACHE: Lazy<DashMap<CacheKey, CachedCatalog>> = Lazy::new(DashMap::new);

    /// Cache TTL: 5 minutes
    pub const CACHE_TTL: Duration = Duration::from_secs(300);

    /// Get from cache if not expired
    #[allow(dead_code)]
    pub fn get_cached(source: &str) -> Option<Vec<crate::domain::models::Shoe>> {
        if let Some(entry) = CATALOG_CACHE.get(source) {
            if entry.cached_at.elapsed() < CACHE_TTL {
                return Some(entry.shoes.clone());
            } else {
                // Expired, remove from cache
                drop(entry);
                CATALOG_CACHE.remove(source);
            }
        }
        None
    }

    /// Insert into cache
    #[allow(dead_code)]
    pub fn set_cached(source: &str, shoes: Vec<crate::domain::models::Shoe>) {
        CATALOG_CACHE.insert(
            source.to_string(),
            CachedCatalog {
                shoes,
                cached_at: Instant::now(),
            },
        );
    }
}

/// Full catalog, newest release first.
#[server]
pub async fn get_shoes() -> Result<Vec<Shoe>, ServerFnError> {
    use crate::catalog::load_catalog;

    let source = crate::config::catalog_path().display().to_string();
    if let Some(shoes) = cache::get_cached(&source) {
        return Ok(shoes);
    }

    let shoes = load_catalog().map_err(|e| ServerFnError::new(e))?;
    cache::set_cached(&source, shoes.clone());
    Ok(shoes)
}

/// Single shoe by slug. `Ok(None)` for an unknown slug.
#[server]
pub async fn get_shoe(slug: String) -> Result<Option<Shoe>, ServerFnError> {
    let shoes = get_shoes().await?;
    Ok(shoes.into_iter().find(|s| s.slug == slug))
}
