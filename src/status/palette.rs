//! # Palette
//!
//! The fixed colors and glyphs of the status line.
//!
//! ## Overview
//!
//! [`PALETTE`] maps each semantic role to a tmux color name. Rendering code
//! never spells out a color directly; it goes through [`WindowState`] for
//! windows and the palette fields for everything else.
//!
//! ## Styling Syntax
//!
//! Output uses tmux's inline style directives:
//!
//! ```text
//! #[fg=colour232,bg=colour35,bold]   segment style
//! #[fg=colour35]#[bg=colour240]      separator colors, followed by a glyph
//! ```
//!
//! Separators are the powerline triangles [`ARROW_RIGHT`] (U+E0B0) and
//! [`ARROW_LEFT`] (U+E0B2); they need a patched font to display.

use crate::tmux::WindowInfo;

/// Right-pointing separator used on the left status.
pub const ARROW_RIGHT: char = '\u{e0b0}';

/// Left-pointing separator used on the right status.
pub const ARROW_LEFT: char = '\u{e0b2}';

/// All colors used by the status line, grouped by semantic role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Status bar background behind all segments.
    pub bg: &'static str,

    // -- Session badge --
    pub session: &'static str,
    pub session_fg: &'static str,

    // -- Windows --
    pub active: &'static str,
    pub active_fg: &'static str,
    pub inactive: &'static str,
    pub inactive_fg: &'static str,
    pub activity: &'static str,
    pub activity_fg: &'static str,

    // -- Right status --
    pub clock: &'static str,
    pub clock_fg: &'static str,
    pub hostname: &'static str,
    pub hostname_fg: &'static str,
}

pub const PALETTE: Palette = Palette {
    bg: "colour236",
    session: "colour226",
    session_fg: "colour232",
    active: "colour35",
    active_fg: "colour232",
    inactive: "colour240",
    inactive_fg: "colour253",
    activity: "colour179",
    activity_fg: "colour232",
    clock: "colour245",
    clock_fg: "colour232",
    hostname: "colour39",
    hostname_fg: "colour232",
};

/// Foreground, background and weight of one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentStyle {
    pub fg: &'static str,
    pub bg: &'static str,
    pub bold: bool,
}

impl SegmentStyle {
    pub const fn new(fg: &'static str, bg: &'static str, bold: bool) -> Self {
        Self { fg, bg, bold }
    }

    /// The `#[fg=..,bg=..]` directive, with `,bold` when set.
    pub fn directive(&self) -> String {
        format!(
            "#[fg={},bg={}{}]",
            self.fg,
            self.bg,
            if self.bold { ",bold" } else { "" }
        )
    }
}

/// Visual state of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Active,
    Activity,
    Inactive,
}

impl WindowState {
    /// Classify a window. Focus wins over the activity flag.
    pub fn of(window: &WindowInfo) -> Self {
        if window.is_active {
            WindowState::Active
        } else if window.has_activity {
            WindowState::Activity
        } else {
            WindowState::Inactive
        }
    }

    pub fn style(self) -> SegmentStyle {
        match self {
            WindowState::Active => SegmentStyle::new(PALETTE.active_fg, PALETTE.active, true),
            WindowState::Activity => {
                SegmentStyle::new(PALETTE.activity_fg, PALETTE.activity, false)
            }
            WindowState::Inactive => {
                SegmentStyle::new(PALETTE.inactive_fg, PALETTE.inactive, false)
            }
        }
    }

    pub fn background(self) -> &'static str {
        self.style().bg
    }
}

/// Background a separator should transition into: the next window's, or the
/// bar background when there is none.
pub fn next_background(next: Option<&WindowInfo>) -> &'static str {
    next.map_or(PALETTE.bg, |w| WindowState::of(w).background())
}

/// Right-pointing separator from `from_bg` into `to_bg`.
pub fn arrow(from_bg: &str, to_bg: &str) -> String {
    format!("#[fg={from_bg}]#[bg={to_bg}]{ARROW_RIGHT}")
}

/// Left-pointing separator from `from_bg` into `to_bg`.
pub fn arrow_left(from_bg: &str, to_bg: &str) -> String {
    format!("#[fg={from_bg}]#[bg={to_bg}]{ARROW_LEFT}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_priority() {
        assert_eq!(
            WindowState::of(&WindowInfo::new(0, "a", true, true)),
            WindowState::Active
        );
        assert_eq!(
            WindowState::of(&WindowInfo::new(0, "a", false, true)),
            WindowState::Activity
        );
        assert_eq!(
            WindowState::of(&WindowInfo::new(0, "a", false, false)),
            WindowState::Inactive
        );
    }

    #[test]
    fn test_only_active_windows_are_bold() {
        assert!(WindowState::Active.style().bold);
        assert!(!WindowState::Activity.style().bold);
        assert!(!WindowState::Inactive.style().bold);
    }

    #[test]
    fn test_directive() {
        assert_eq!(
            WindowState::Active.style().directive(),
            "#[fg=colour232,bg=colour35,bold]"
        );
        assert_eq!(
            WindowState::Inactive.style().directive(),
            "#[fg=colour253,bg=colour240]"
        );
    }

    #[test]
    fn test_arrows() {
        assert_eq!(
            arrow("colour226", "colour35"),
            "#[fg=colour226]#[bg=colour35]\u{e0b0}"
        );
        assert_eq!(
            arrow_left("colour245", "colour236"),
            "#[fg=colour245]#[bg=colour236]\u{e0b2}"
        );
    }

    #[test]
    fn test_next_background() {
        assert_eq!(next_background(None), "colour236");
        let logs = WindowInfo::new(1, "logs", false, true);
        assert_eq!(next_background(Some(&logs)), "colour179");
    }
}
