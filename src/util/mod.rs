//! Browser helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `web-sys` and timer glue from page and component
//! logic. Each degrades to a no-op outside the `csr` build so the rest of the
//! crate can be tested natively.

pub mod preference;
pub mod theme;
pub mod timer;
