//! # Status Module
//!
//! Builds the two halves of the tmux status line.
//!
//! ## Components
//!
//! - [`palette`] - Fixed colors, separator glyphs, and window state styling
//! - [`mod@render`] - Pure functions from state to styled text
//! - [`StatusRenderer`] - Queries tmux and feeds the renderers
//!
//! ## Window States
//!
//! | State | Condition | Background | Bold |
//! |-------|-----------|------------|------|
//! | Active | focused window | `colour35` | yes |
//! | Activity | unseen output | `colour179` | no |
//! | Inactive | otherwise | `colour240` | no |
//!
//! A focused window is always drawn as Active, even with its activity flag set.

pub mod palette;
pub mod render;
pub mod renderer;

pub use palette::{SegmentStyle, WindowState, ARROW_LEFT, ARROW_RIGHT, PALETTE};
pub use render::{
    escape_text, format_clock, render_left, render_right, render_session_badge, render_windows,
    resolve_hostname,
};
pub use renderer::StatusRenderer;
