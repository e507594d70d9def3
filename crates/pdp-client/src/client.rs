//! Product fetch over the browser fetch API.

use gloo_net::http::Request;
use pdp_core::{CatalogError, Product, ProductId};

/// What actually went wrong during a fetch.
///
/// [`ProductClient::fetch_product`] collapses all of these into
/// [`CatalogError::NotFound`], per the single failure taxonomy of the
/// detail view.
#[derive(Debug, thiserror::Error)]
pub enum FetchFailure {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Client for the remote catalog API.
///
/// One outstanding request at a time is the caller's concern; the client
/// itself is stateless apart from the base URL.
#[derive(Debug, Clone)]
pub struct ProductClient {
    base_url: String,
}

impl ProductClient {
    /// Create a client for the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a single product resource.
    pub fn product_url(&self, id: &ProductId) -> String {
        format!("{}/products/{}", self.base_url, id)
    }

    /// Fetch a product by identifier.
    ///
    /// Network errors, non-success statuses and malformed bodies all fail
    /// with `NotFound`; the view renders the same fallback regardless.
    pub async fn fetch_product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        self.get_product(id)
            .await
            .map_err(|_| CatalogError::NotFound(id.to_string()))
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, FetchFailure> {
        let url = self.product_url(id);

        let resp = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchFailure::Connection(e.to_string()))?;

        if !resp.ok() {
            return Err(FetchFailure::Http {
                status: resp.status(),
                url,
            });
        }

        resp.json::<Product>()
            .await
            .map_err(|e| FetchFailure::Deserialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_url() {
        let client = ProductClient::new("https://api.example.com");
        let id = ProductId::new("prod-42");
        assert_eq!(
            client.product_url(&id),
            "https://api.example.com/products/prod-42"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = ProductClient::new("https://api.example.com/");
        assert_eq!(client.base_url(), "https://api.example.com");
        assert_eq!(
            client.product_url(&ProductId::new("1")),
            "https://api.example.com/products/1"
        );
    }

    #[test]
    fn test_failure_display() {
        let failure = FetchFailure::Http {
            status: 500,
            url: "https://api.example.com/products/1".to_string(),
        };
        assert_eq!(
            failure.to_string(),
            "HTTP error: 500 for https://api.example.com/products/1"
        );
    }
}
