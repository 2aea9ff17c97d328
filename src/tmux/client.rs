//! # tmux Client
//!
//! Runs `tmux` as a child process and awaits its output. Each query spawns
//! exactly one process and waits for it to exit with its stdout fully
//! drained. There is no timeout: if tmux hangs, so does the query.

use std::ffi::OsString;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::error::StatusError;
use crate::tmux::window::{parse_window_list, LabelMode, WindowInfo};

/// Source of session and window state (allows dependency injection for testing)
#[allow(async_fn_in_trait)]
pub trait Multiplexer {
    /// List windows, scoped to `session` when given, otherwise the current one.
    async fn list_windows(
        &self,
        session: Option<&str>,
        mode: LabelMode,
    ) -> Result<Vec<WindowInfo>, StatusError>;

    /// Name of the session the client is attached to.
    async fn current_session(&self) -> Result<String, StatusError>;
}

/// Production multiplexer that shells out to the tmux binary
#[derive(Debug, Clone)]
pub struct TmuxCommand {
    program: OsString,
}

impl TmuxCommand {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run tmux with `args` and return its stdout.
    async fn run(&self, args: &[&str]) -> Result<String, StatusError> {
        let command = args.join(" ");
        debug!(program = ?self.program, %command, "querying tmux");

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                StatusError::query(
                    &command,
                    format!("failed to run {}: {}", self.program.to_string_lossy(), e),
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(StatusError::query(
                &command,
                format!("{}: {}", output.status, stderr.trim()),
            ));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| StatusError::query(&command, format!("output is not UTF-8: {}", e)))
    }
}

impl Multiplexer for TmuxCommand {
    async fn list_windows(
        &self,
        session: Option<&str>,
        mode: LabelMode,
    ) -> Result<Vec<WindowInfo>, StatusError> {
        let mut args = vec!["list-windows"];
        if let Some(session) = session {
            args.extend(["-t", session]);
        }
        args.extend(["-F", mode.list_format()]);

        let output = self.run(&args).await?;
        let windows = parse_window_list(&output, mode)?;
        debug!(count = windows.len(), "listed windows");
        Ok(windows)
    }

    async fn current_session(&self) -> Result<String, StatusError> {
        let output = self.run(&["display-message", "-p", "#S"]).await?;
        let session = output.trim();
        if session.is_empty() {
            return Err(StatusError::query(
                "display-message -p #S",
                "tmux reported no current session",
            ));
        }
        Ok(session.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A tmux binary that cannot be spawned is a query failure
    #[tokio::test]
    async fn test_missing_binary_is_query_failure() {
        let tmux = TmuxCommand::new("/nonexistent/bin/tmux-status-test");
        let err = tmux.current_session().await.unwrap_err();

        match err {
            StatusError::QueryFailure { command, reason } => {
                assert_eq!(command, "display-message -p #S");
                assert!(reason.contains("failed to run"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    /// Non-zero exit carries the command line in the error
    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_is_query_failure() {
        // `false` ignores its arguments and exits 1
        let tmux = TmuxCommand::new("false");
        let err = tmux
            .list_windows(Some("dev"), LabelMode::Name)
            .await
            .unwrap_err();
        assert!(matches!(err, StatusError::QueryFailure { .. }));
        assert!(err.to_string().contains("list-windows -t dev -F"));
    }

    /// Empty stdout means a session without windows
    #[cfg(unix)]
    #[tokio::test]
    async fn test_empty_output_lists_no_windows() {
        // `true` prints nothing and exits 0
        let tmux = TmuxCommand::new("true");
        let windows = tmux.list_windows(None, LabelMode::Name).await.expect("list");
        assert!(windows.is_empty());
    }

    /// `display-message` printing nothing is not a usable session name
    #[cfg(unix)]
    #[tokio::test]
    async fn test_empty_session_name_is_query_failure() {
        let tmux = TmuxCommand::new("true");
        assert!(tmux.current_session().await.is_err());
    }

    /// Output that is not UTF-8 is rejected before parsing
    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_utf8_output_is_query_failure() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        let dir = TempDir::new().expect("create temp dir");
        let script = dir.path().join("tmux");
        fs::write(&script, "#!/bin/sh\nprintf '0|\\377|1|0\\n'\n").expect("write script");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).expect("chmod");

        let tmux = TmuxCommand::new(&script);
        let err = tmux
            .list_windows(None, LabelMode::Name)
            .await
            .unwrap_err();

        match err {
            StatusError::QueryFailure { reason, .. } => {
                assert!(reason.contains("not UTF-8"), "unexpected reason: {reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
