//! # Segment Rendering
//!
//! Pure functions that turn session and window state into tmux-styled text.
//! Nothing here talks to tmux or reads the environment; see
//! [`StatusRenderer`](crate::status::StatusRenderer) for that.
//!
//! ## Left Status
//!
//! ```text
//!  dev  ▶ 0 vim ▶ 1 logs ▶
//! ```
//!
//! Every separator is drawn in the color of the segment it closes over the
//! background of the segment that follows, so each arrow previews the next
//! window's state. The last one fades into the bar background.
//!
//! ## Right Status
//!
//! ```text
//! ◀ 14:05 ◀ box1
//! ```
//!
//! ## Escaping
//!
//! tmux expands formats in `#()` output, so session names, window labels and
//! hostnames pass through [`escape_text`] first. A window named `#[fg=red]`
//! shows up literally instead of restyling the bar.

use chrono::Timelike;

use crate::status::palette::{
    arrow, arrow_left, next_background, SegmentStyle, WindowState, PALETTE,
};
use crate::tmux::WindowInfo;

/// Environment variables checked for the hostname, in order.
pub const HOSTNAME_VARS: [&str; 2] = ["HOSTNAME", "HOST"];

/// Bold session badge followed by a separator into the first window (or
/// the bar background when the session has no windows).
pub fn render_session_badge(session: &str, first: Option<&WindowInfo>) -> String {
    let mut out = SegmentStyle::new(PALETTE.session_fg, PALETTE.session, true).directive();
    out.push_str(&format!(" {} ", escape_text(session)));
    out.push_str(&arrow(PALETTE.session, next_background(first)));
    out
}

/// One styled segment per window, each closed by a separator into the next.
pub fn render_windows(windows: &[WindowInfo]) -> String {
    let mut out = String::new();

    for (i, win) in windows.iter().enumerate() {
        let style = WindowState::of(win).style();
        out.push_str(&style.directive());
        out.push_str(&format!(" {} {} ", win.index, escape_text(&win.label)));
        out.push_str(&arrow(style.bg, next_background(windows.get(i + 1))));
    }

    out
}

/// Session badge and window list.
pub fn render_left(session: &str, windows: &[WindowInfo]) -> String {
    let mut out = render_session_badge(session, windows.first());
    out.push_str(&render_windows(windows));
    out
}

/// Clock segment, then the hostname badge when one is known.
pub fn render_right(time: &impl Timelike, hostname: Option<&str>) -> String {
    let mut out = arrow_left(PALETTE.clock, PALETTE.bg);
    out.push_str(&SegmentStyle::new(PALETTE.clock_fg, PALETTE.clock, false).directive());
    out.push_str(&format!(" {} ", format_clock(time)));

    if let Some(hostname) = hostname {
        out.push_str(&arrow_left(PALETTE.hostname, PALETTE.clock));
        out.push_str(&SegmentStyle::new(PALETTE.hostname_fg, PALETTE.hostname, true).directive());
        out.push_str(&format!(" {} ", escape_text(hostname)));
    }

    out
}

/// Double every `#` so tmux prints it instead of starting a directive.
pub fn escape_text(text: &str) -> String {
    text.replace('#', "##")
}

/// Zero-padded 24-hour `HH:MM`.
pub fn format_clock(time: &impl Timelike) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// First non-empty value among [`HOSTNAME_VARS`].
pub fn resolve_hostname<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    HOSTNAME_VARS
        .into_iter()
        .filter_map(&lookup)
        .find(|value| !value.is_empty())
}
