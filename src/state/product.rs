//! Product card state: add-to-cart notice and image fallback.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use super::banner::Banner;

/// Text shown after "Add to Cart".
pub const CART_MESSAGE: &str = "✓ Product added to cart successfully!";

/// Whether the product image loaded or fell back to the placeholder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageStatus {
    #[default]
    Pending,
    Loaded,
    Failed,
}

/// Product card state.
#[derive(Clone, Debug, Default)]
pub struct ProductCardState {
    pub cart_notice: Banner,
    pub image: ImageStatus,
}

impl ProductCardState {
    /// Show the cart notice. Returns the epoch to schedule its hide for.
    pub fn add_to_cart(&mut self) -> u64 {
        self.cart_notice.show(CART_MESSAGE)
    }

    /// The image fired `error`: swap to the placeholder.
    pub fn image_failed(&mut self) {
        self.image = ImageStatus::Failed;
    }

    pub fn image_loaded(&mut self) {
        if self.image != ImageStatus::Failed {
            self.image = ImageStatus::Loaded;
        }
    }

    /// CSS `display` for the `<img>`.
    #[must_use]
    pub fn image_display(&self) -> &'static str {
        if self.image == ImageStatus::Failed { "none" } else { "block" }
    }

    /// CSS `display` for the placeholder shown in place of a broken image.
    #[must_use]
    pub fn placeholder_display(&self) -> &'static str {
        if self.image == ImageStatus::Failed { "flex" } else { "none" }
    }
}
