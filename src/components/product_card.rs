//! Product card with an add-to-cart button and an image fallback.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cart notice is transient: each click shows it and restarts its hide
//! timer, so rapid clicks keep it up for one full delay after the last click.

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::state::product::ProductCardState;
use crate::util::timer::HideTimer;

const PRODUCT_IMAGE_SRC: &str = "/images/product.jpg";

#[component]
pub fn ProductCard() -> impl IntoView {
    let config = expect_context::<PageConfig>();
    let card = RwSignal::new(ProductCardState::default());
    let hide_timer = StoredValue::new_local(HideTimer::default());
    let notice_ms = config.cart_notice_ms;

    let on_add_to_cart = move |_| {
        let Some(epoch) = card.try_update(ProductCardState::add_to_cart) else {
            return;
        };
        hide_timer.update_value(|timer| {
            timer.schedule(notice_ms, move || {
                card.update(|c| {
                    c.cart_notice.expire(epoch);
                });
            });
        });
    };

    view! {
        <article class="product-card">
            <div class="product-image">
                <img
                    id="productImage"
                    src=PRODUCT_IMAGE_SRC
                    alt="Canvas weekender bag in olive green"
                    style:display=move || card.with(ProductCardState::image_display)
                    on:load=move |_| card.update(ProductCardState::image_loaded)
                    on:error=move |_| card.update(ProductCardState::image_failed)
                />
                <div
                    class="image-placeholder"
                    style:display=move || card.with(ProductCardState::placeholder_display)
                >
                    <span>"Image unavailable"</span>
                </div>
            </div>
            <div class="product-info">
                <h2 class="product-title">"Canvas Weekender Bag"</h2>
                <p class="product-description">
                    "Waxed canvas, leather handles, and a padded laptop sleeve. Sized for carry-on."
                </p>
                <p class="product-price">"$129.00"</p>
                <button id="addToCartBtn" class="add-to-cart-btn" type="button" on:click=on_add_to_cart>
                    "Add to Cart"
                </button>
                <p
                    id="cartMessage"
                    class=move || card.with(|c| c.cart_notice.class("cart-message", "success"))
                    role="status"
                    aria-live="polite"
                >
                    {move || card.with(|c| c.cart_notice.text().to_owned())}
                </p>
            </div>
        </article>
    }
}
