//! HTTP handlers, one module per resource.
//!
//! Every handler validates its input before touching the store and issues a
//! single repository call.

pub mod chapters;
pub mod characters;
pub mod credentials;
pub mod notes;
pub mod novels;
pub mod settings;
pub mod users;
