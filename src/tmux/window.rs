//! # Window List Parsing
//!
//! Turns the output of `tmux list-windows -F <format>` into [`WindowInfo`]
//! records.
//!
//! ## Output Format
//!
//! Each line carries `|`-separated fields. The first field is the window
//! index and the last two are the active and activity flags (`1` or `0`):
//!
//! ```text
//! 0|vim|1|0
//! 1|logs|0|1
//! ```
//!
//! In [`LabelMode::Command`] the middle holds the running command and the
//! basename of the pane's working directory:
//!
//! ```text
//! 0|nvim|tmux-status|1|0
//! ```
//!
//! A `|` inside a window name or directory is kept as part of the label.

use crate::error::StatusError;

/// One tmux window at query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowInfo {
    /// Position within the session (unique, not necessarily contiguous)
    pub index: u32,
    /// Text shown after the index
    pub label: String,
    /// Currently focused window
    pub is_active: bool,
    /// Unseen output since the window was last viewed
    pub has_activity: bool,
}

impl WindowInfo {
    pub fn new(index: u32, label: impl Into<String>, is_active: bool, has_activity: bool) -> Self {
        Self {
            index,
            label: label.into(),
            is_active,
            has_activity,
        }
    }
}

/// How window labels are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelMode {
    /// The window's own name (`#{window_name}`)
    #[default]
    Name,
    /// `command:directory` of the window's active pane
    Command,
}

impl LabelMode {
    /// The `-F` format string passed to `tmux list-windows`.
    pub fn list_format(self) -> &'static str {
        match self {
            LabelMode::Name => {
                "#{window_index}|#{window_name}|#{window_active}|#{window_activity_flag}"
            }
            LabelMode::Command => {
                "#{window_index}|#{pane_current_command}|#{b:pane_current_path}|#{window_active}|#{window_activity_flag}"
            }
        }
    }

    /// Minimum number of `|`-separated fields a line must have.
    fn field_count(self) -> usize {
        match self {
            LabelMode::Name => 4,
            LabelMode::Command => 5,
        }
    }
}

/// Parse `tmux list-windows` output into windows ordered by index.
///
/// Empty output (or output made only of blank lines) yields an empty list.
pub fn parse_window_list(output: &str, mode: LabelMode) -> Result<Vec<WindowInfo>, StatusError> {
    let mut windows = output
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_window_line(line, mode))
        .collect::<Result<Vec<_>, _>>()?;

    windows.sort_by_key(|w| w.index);
    Ok(windows)
}

fn parse_window_line(line: &str, mode: LabelMode) -> Result<WindowInfo, StatusError> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() < mode.field_count() {
        return Err(StatusError::query(
            "list-windows",
            format!(
                "expected {} fields, got {} in line {:?}",
                mode.field_count(),
                fields.len(),
                line
            ),
        ));
    }

    let index = fields[0].trim().parse::<u32>().map_err(|e| {
        StatusError::query(
            "list-windows",
            format!("invalid window index {:?}: {}", fields[0], e),
        )
    })?;

    let flags_at = fields.len() - 2;
    let middle = &fields[1..flags_at];
    let label = match mode {
        LabelMode::Name => middle.join("|"),
        // Command names never contain `|`, so anything extra belongs to the directory
        LabelMode::Command => format!("{}:{}", middle[0], middle[1..].join("|")),
    };

    Ok(WindowInfo {
        index,
        label,
        is_active: fields[flags_at] == "1",
        has_activity: fields[flags_at + 1] == "1",
    })
}
