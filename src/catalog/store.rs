//! Catalog store
//!
//! Server-side source of shoe listings. The catalog is a JSON array of shoe
//! records: either the embedded default or an on-disk document pointed at by
//! `SHOE_CATALOG_PATH`. An unreadable file falls back to the embedded
//! catalog; a file that reads but does not parse is an error.

use std::fs;

use crate::config;
use crate::domain::models::Shoe;
use crate::shared::errors::Result;
use crate::shared::logging;

/// Default catalog bundled into the binary.
const DEFAULT_CATALOG_JSON: &str = include_str!("../../data/shoes.json");

/// Load the full catalog, newest release first.
pub fn load_catalog() -> Result<Vec<Shoe>> {
    let path = config::catalog_path();

    let (raw, source) = if path.is_file() {
        match fs::read_to_string(&path) {
            Ok(raw) => (raw, path.display().to_string()),
            Err(e) => {
                logging::log_catalog_read_error(&path, &e.to_string());
                (DEFAULT_CATALOG_JSON.to_string(), "embedded".to_string())
            }
        }
    } else {
        (DEFAULT_CATALOG_JSON.to_string(), "embedded".to_string())
    };

    logging::log_catalog_load_start(&source);
    let shoes = parse_catalog(&raw, &source)?;
    logging::log_catalog_load_result(&source, shoes.len());
    Ok(shoes)
}

/// Look up a single shoe by slug.
pub fn find_shoe(slug: &str) -> Result<Option<Shoe>> {
    let shoe = load_catalog()?.into_iter().find(|s| s.slug == slug);
    if shoe.is_none() {
        logging::log_shoe_lookup_miss(slug);
    }
    Ok(shoe)
}

fn parse_catalog(raw: &str, source: &str) -> Result<Vec<Shoe>> {
    let mut shoes: Vec<Shoe> = serde_json::from_str(raw).map_err(|e| {
        logging::log_catalog_parse_error(source, &e.to_string());
        e
    })?;

    // Newest release first
    shoes.sort_by(|a, b| b.release_date.cmp(&a.release_date));
    Ok(shoes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::AppError;

    #[test]
    fn test_embedded_catalog_parses() {
        let shoes = parse_catalog(DEFAULT_CATALOG_JSON, "embedded").unwrap();
        assert!(!shoes.is_empty());
    }

    #[test]
    fn test_catalog_is_sorted_newest_first() {
        let shoes = parse_catalog(DEFAULT_CATALOG_JSON, "embedded").unwrap();
        for pair in shoes.windows(2) {
            assert!(pair[0].release_date >= pair[1].release_date);
        }
    }

    #[test]
    fn test_find_shoe_by_slug() {
        // Uses the default on-disk catalog relative to the crate root
        let shoe = find_shoe("granite-peak-hiker").unwrap();
        assert_eq!(shoe.unwrap().name, "Granite Peak Hiker");
    }

    #[test]
    fn test_find_shoe_unknown_slug_is_none() {
        assert_eq!(find_shoe("no-such-shoe").unwrap(), None);
    }

    #[test]
    fn test_missing_sale_price_field_is_absent() {
        let raw = r#"[{
            "slug": "bare",
            "name": "Bare",
            "image_src": "/img/bare.jpg",
            "price": 1000,
            "release_date": "2025-01-01T00:00:00Z",
            "num_of_colors": 1
        }]"#;
        let shoes = parse_catalog(raw, "test").unwrap();
        assert_eq!(shoes[0].sale_price, None);
    }

    #[test]
    fn test_malformed_catalog_is_a_parse_error() {
        let err = parse_catalog("{ not json", "test").unwrap_err();
        assert!(matches!(err, AppError::SerializationError(_)));
    }
}
