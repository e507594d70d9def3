//! Catalog error types.

use thiserror::Error;

/// Errors that can occur when loading a product.
///
/// The detail view deliberately collapses every failure kind — network
/// error, non-success HTTP status, malformed body — into `NotFound`. The
/// view renders the same fallback for all of them; the underlying cause is
/// logged at the fetch boundary as a developer diagnostic only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Product could not be loaded, for any reason.
    #[error("Product not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::NotFound("prod-9".to_string());
        assert_eq!(err.to_string(), "Product not found: prod-9");
    }
}
