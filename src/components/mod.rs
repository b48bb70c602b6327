//! Reusable UI components for the storefront page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components forward DOM events into the state models and render them back;
//! decisions live in `crate::state` and the `forms` crate.

pub mod form_field;
pub mod product_card;
pub mod registration_form;
pub mod theme_toggle;
