//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `fetch`, `analytics`) so screens can
//! depend on small focused models instead of one app-wide blob.

pub mod analytics;
pub mod fetch;
pub mod session;
