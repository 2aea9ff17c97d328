//! # Status Renderer
//!
//! Glue between a [`Multiplexer`] and the pure segment renderers. Each call
//! queries what it needs, awaits it, and only then builds the output, so a
//! failed query never produces a partial status line.

use chrono::Local;
use tracing::warn;

use crate::error::StatusError;
use crate::status::render;
use crate::tmux::{LabelMode, Multiplexer, WindowInfo};

/// Renders the left and right status segments from live tmux state.
#[derive(Debug, Clone)]
pub struct StatusRenderer<M> {
    tmux: M,
    labels: Option<LabelMode>,
}

impl<M: Multiplexer> StatusRenderer<M> {
    /// Renderer that picks the label mode from how the session was given:
    /// window names for the current session, `command:directory` when a
    /// session is named explicitly.
    pub fn new(tmux: M) -> Self {
        Self { tmux, labels: None }
    }

    /// Renderer that always uses `mode` for window labels.
    pub fn with_labels(tmux: M, mode: LabelMode) -> Self {
        Self {
            tmux,
            labels: Some(mode),
        }
    }

    fn label_mode(&self, session: Option<&str>) -> LabelMode {
        self.labels.unwrap_or(match session {
            Some(_) => LabelMode::Command,
            None => LabelMode::Name,
        })
    }

    async fn windows(&self, session: Option<&str>) -> Result<Vec<WindowInfo>, StatusError> {
        let windows = self
            .tmux
            .list_windows(session, self.label_mode(session))
            .await?;

        let active = windows.iter().filter(|w| w.is_active).count();
        if active > 1 {
            warn!(active, ?session, "more than one window reports itself active");
        }

        Ok(windows)
    }

    /// Session badge followed by the window list.
    ///
    /// Without `session` the current session is resolved first. The window
    /// list is queried once and used for both the badge's separator color
    /// and the window segments.
    pub async fn render_left(&self, session: Option<&str>) -> Result<String, StatusError> {
        check_session(session)?;
        let name = match session {
            Some(name) => name.to_string(),
            None => self.tmux.current_session().await?,
        };

        let windows = self.windows(session).await?;
        Ok(render::render_left(&name, &windows))
    }

    /// Just the window list, `session` scoped as in [`Self::render_left`].
    pub async fn render_windows(&self, session: Option<&str>) -> Result<String, StatusError> {
        check_session(session)?;
        let windows = self.windows(session).await?;
        Ok(render::render_windows(&windows))
    }

    /// Clock in local time plus the hostname from the environment.
    ///
    /// Needs no tmux query, so it cannot fail.
    pub fn render_right(&self) -> String {
        let hostname = render::resolve_hostname(|var| std::env::var(var).ok());
        render::render_right(&Local::now(), hostname.as_deref())
    }
}

/// An explicitly named session must not be blank; `-t ""` would make tmux
/// pick a target on its own.
fn check_session(session: Option<&str>) -> Result<(), StatusError> {
    match session {
        Some(name) if name.trim().is_empty() => Err(StatusError::Usage(
            "session name must not be empty".to_string(),
        )),
        _ => Ok(()),
    }
}
