//! # tmux Module
//!
//! Access to the tmux server: listing a session's windows and resolving the
//! current session name.
//!
//! ## Queries
//!
//! | Query | Command |
//! |-------|---------|
//! | Windows | `tmux list-windows [-t <session>] -F <format>` |
//! | Session | `tmux display-message -p '#S'` |
//!
//! The `-F` format depends on the [`LabelMode`].

pub mod client;
pub mod window;

pub use client::{Multiplexer, TmuxCommand};
pub use window::{parse_window_list, LabelMode, WindowInfo};
