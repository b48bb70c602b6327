use super::*;

#[test]
fn add_to_cart_shows_notice() {
    let mut card = ProductCardState::default();
    let epoch = card.add_to_cart();
    assert!(card.cart_notice.is_visible());
    assert_eq!(card.cart_notice.text(), CART_MESSAGE);
    assert_eq!(card.cart_notice.class("cart-message", "success"), "cart-message success");
    assert!(card.cart_notice.expire(epoch));
    assert_eq!(card.cart_notice.class("cart-message", "success"), "cart-message");
    assert_eq!(card.cart_notice.text(), "");
}

#[test]
fn repeated_add_to_cart_restarts_notice() {
    let mut card = ProductCardState::default();
    let first = card.add_to_cart();
    let second = card.add_to_cart();
    assert!(!card.cart_notice.expire(first));
    assert!(card.cart_notice.is_visible());
    assert!(card.cart_notice.expire(second));
}

#[test]
fn image_shows_until_it_fails() {
    let mut card = ProductCardState::default();
    assert_eq!(card.image_display(), "block");
    assert_eq!(card.placeholder_display(), "none");
    card.image_loaded();
    assert_eq!(card.image, ImageStatus::Loaded);
    assert_eq!(card.image_display(), "block");
}

#[test]
fn image_failure_swaps_to_placeholder() {
    let mut card = ProductCardState::default();
    card.image_failed();
    assert_eq!(card.image_display(), "none");
    assert_eq!(card.placeholder_display(), "flex");
}

#[test]
fn late_load_does_not_undo_failure() {
    let mut card = ProductCardState::default();
    card.image_failed();
    card.image_loaded();
    assert_eq!(card.image, ImageStatus::Failed);
}
