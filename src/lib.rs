//! tmux-status - Powerline-style segments for the tmux status line
//!
//! This library queries tmux for the current session and its windows and
//! renders them as styled text for `status-left` and `status-right`.

pub mod error;
pub mod logging;
pub mod status;
pub mod tmux;

pub use error::StatusError;
