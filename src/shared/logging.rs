//! Structured logging module for Shoe Catalog Viewer
//!
//! Provides consistent, contextual logging across the application.
//! Uses structured fields so catalog operations can be traced end to end.

use std::path::Path;

/// Log levels for different operations
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    CatalogLoad,
    CatalogParse,
    ShoeLookup,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::CatalogLoad => "catalog_load",
            LogOperation::CatalogParse => "catalog_parse",
            LogOperation::ShoeLookup => "shoe_lookup",
        }
    }
}

/// Log catalog load start
pub fn log_catalog_load_start(source: &str) {
    tracing::info!(
        operation = LogOperation::CatalogLoad.as_str(),
        source = source,
        "Loading shoe catalog"
    );
}

/// Log catalog load result
pub fn log_catalog_load_result(source: &str, shoe_count: usize) {
    tracing::info!(
        operation = LogOperation::CatalogLoad.as_str(),
        source = source,
        shoe_count = shoe_count,
        "Shoe catalog loaded"
    );
}

/// Log catalog file read failure before falling back to the embedded catalog
pub fn log_catalog_read_error(path: &Path, error: &str) {
    tracing::warn!(
        operation = LogOperation::CatalogLoad.as_str(),
        path = %path.display(),
        error = error,
        "Failed to read catalog file"
    );
}

/// Log catalog parse failure
pub fn log_catalog_parse_error(source: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::CatalogParse.as_str(),
        source = source,
        error = error,
        "Failed to parse shoe catalog"
    );
}

/// Log a shoe lookup miss
pub fn log_shoe_lookup_miss(slug: &str) {
    tracing::debug!(
        operation = LogOperation::ShoeLookup.as_str(),
        slug = slug,
        "No shoe with requested slug"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::CatalogLoad.as_str(), "catalog_load");
        assert_eq!(LogOperation::CatalogParse.as_str(), "catalog_parse");
        assert_eq!(LogOperation::ShoeLookup.as_str(), "shoe_lookup");
    }
}
