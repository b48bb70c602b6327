//! Registration-form validation engine.
//!
//! This crate holds every decision the registration page makes about its
//! form, with no browser dependency. The Leptos client reads field values into
//! a [`snapshot::FormSnapshot`], asks the [`validator::FormValidator`] what
//! changed, and renders the resulting [`state::FieldStates`]. Everything here
//! runs natively under `cargo test`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`field`] | Closed set of managed fields and their DOM ids |
//! | [`snapshot`] | Point-in-time field values for cross-field rules |
//! | [`rules`] | Rule table: predicate + message per field |
//! | [`validator`] | Single-field, whole-form, blur, and input orchestration |
//! | [`state`] | Per-field validation state and its pure presentation |
//! | [`display`] | Error-display collaborator trait |
//! | [`consts`] | Thresholds, patterns, messages, marker classes |

pub mod consts;
pub mod display;
pub mod field;
pub mod rules;
pub mod snapshot;
pub mod state;
pub mod validator;
