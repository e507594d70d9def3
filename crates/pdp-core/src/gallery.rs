//! Derived image list for the gallery and lightbox.

use crate::product::Product;

/// Placeholder shown when a product has no images.
pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder-product.svg";

/// The ordered image list the gallery renders.
///
/// The product's own images when it has any, otherwise a single
/// placeholder. The gallery, thumbnail strip and lightbox all index into
/// this list, so it is never empty.
pub fn derive_images(product: &Product) -> Vec<String> {
    if product.images.is_empty() {
        vec![PLACEHOLDER_IMAGE.to_string()]
    } else {
        product.images.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    fn product_with_images(images: Vec<&str>) -> Product {
        Product {
            id: ProductId::new("p"),
            name: "Thing".to_string(),
            price: 10.0,
            old_price: None,
            images: images.into_iter().map(String::from).collect(),
            description: None,
            brand: None,
            rating: None,
        }
    }

    #[test]
    fn test_real_images_pass_through_unchanged() {
        let p = product_with_images(vec!["a.jpg", "b.jpg"]);
        assert_eq!(derive_images(&p), vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_empty_images_yield_single_placeholder() {
        let p = product_with_images(vec![]);
        assert_eq!(derive_images(&p), vec![PLACEHOLDER_IMAGE.to_string()]);
    }
}
