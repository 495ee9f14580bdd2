//! Networking modules for the admin REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns request construction and dispatch, `error` defines the failure
//! taxonomy shared by every screen, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
