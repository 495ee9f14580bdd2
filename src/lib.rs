//! # doro-admin
//!
//! Leptos + WASM admin console for the Doro tutoring platform. Staff use it
//! to browse parent/child accounts, review per-child conversation analytics
//! (audio, transcripts, share links), author lessons, edit system prompts,
//! and watch platform status.
//!
//! Every screen is a thin view over the REST backend: fetch, render, submit.
//! The crate compiles natively without the `csr` feature so the pure logic
//! (endpoint builders, state transitions, formatters) is testable with plain
//! `cargo test`; browser-only code paths are gated on `csr`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
