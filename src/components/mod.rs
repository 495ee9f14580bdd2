//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (sidebar layout) and the session-review
//! surfaces (charts, audio player, transcript/share modals) while pages own
//! the route-scoped orchestration.

pub mod audio_player;
pub mod layout;
pub mod share_modal;
pub mod transcript_modal;
pub mod usage_charts;
