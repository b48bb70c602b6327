//! Reactive page state models.
//!
//! DESIGN
//! ======
//! Plain structs held in `RwSignal`s by the components that own them. All
//! transitions are methods here so they run under `cargo test` without a
//! browser; components only forward events and schedule timers.

pub mod banner;
pub mod product;
pub mod registration;
pub mod theme;
