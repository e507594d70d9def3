//! Product wire model and pricing math.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Fallback description when the source omits one.
pub const DEFAULT_DESCRIPTION: &str = "No description available.";

/// Fallback brand when the source omits one.
pub const DEFAULT_BRAND: &str = "Generic";

/// Fallback rating when the source omits one.
pub const DEFAULT_RATING: f64 = 4.5;

/// A product as returned by the remote catalog API.
///
/// The source is trusted: prices are not validated beyond deserialization,
/// and `old_price > price` is assumed when `old_price` is present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current price.
    pub price: f64,
    /// Original price, present only when a discount applies.
    #[serde(default)]
    pub old_price: Option<f64>,
    /// Ordered image URLs; may be empty.
    #[serde(default)]
    pub images: Vec<String>,
    /// Full description.
    #[serde(default)]
    pub description: Option<String>,
    /// Brand name.
    #[serde(default)]
    pub brand: Option<String>,
    /// Average rating out of 5.
    #[serde(default)]
    pub rating: Option<f64>,
}

impl Product {
    /// Description with fallback.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }

    /// Brand with fallback.
    pub fn brand(&self) -> &str {
        self.brand.as_deref().unwrap_or(DEFAULT_BRAND)
    }

    /// Rating with fallback.
    pub fn rating(&self) -> f64 {
        self.rating.unwrap_or(DEFAULT_RATING)
    }

    /// Check if the product is on sale.
    pub fn has_discount(&self) -> bool {
        self.old_price.is_some()
    }

    /// Discount percentage when on sale.
    pub fn discount_percent(&self) -> Option<u8> {
        self.old_price.map(|old| discount_percent(self.price, old))
    }

    /// Amount saved versus the original price, when on sale.
    pub fn savings(&self) -> Option<f64> {
        self.old_price.map(|old| savings(self.price, old))
    }

    /// Rows for the specifications table.
    pub fn specifications(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Brand", self.brand().to_string()),
            ("Rating", format!("{:.1} / 5", self.rating())),
            ("Product ID", self.id.to_string()),
            ("Images", self.images.len().to_string()),
        ]
    }
}

/// Discount percentage, rounded to the nearest integer.
pub fn discount_percent(price: f64, old_price: f64) -> u8 {
    (((old_price - price) / old_price) * 100.0).round() as u8
}

/// Amount saved versus the original price.
pub fn savings(price: f64, old_price: f64) -> f64 {
    old_price - price
}

/// Format a price for display (e.g., "$49.99").
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
