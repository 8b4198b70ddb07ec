//! Runtime configuration.
//!
//! The catalog is the only configurable input: an on-disk JSON document can
//! replace the embedded default via `SHOE_CATALOG_PATH`.

use std::path::PathBuf;

/// Environment variable pointing at a catalog JSON file.
pub const CATALOG_PATH_ENV: &str = "SHOE_CATALOG_PATH";

/// Default on-disk catalog location, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "data/shoes.json";

/// Resolve where the catalog should be read from. The file may not exist;
/// the catalog store falls back to the embedded default in that case.
pub fn catalog_path() -> PathBuf {
    std::env::var(CATALOG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CATALOG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_path_defaults_without_env() {
        if std::env::var(CATALOG_PATH_ENV).is_err() {
            assert_eq!(catalog_path(), PathBuf::from(DEFAULT_CATALOG_PATH));
        }
    }
}
