//! # tmux-status CLI Entry Point
//!
//! Prints one half of the tmux status line and exits. tmux runs it on every
//! status refresh through `#()` in `status-left` / `status-right`.
//!
//! ## Usage
//!
//! ```bash
//! # Session badge and window list for the current session
//! tmux-status left
//!
//! # Same, for a named session (labels windows as command:directory)
//! tmux-status left dev
//!
//! # Clock and hostname
//! tmux-status right
//! ```
//!
//! ## tmux Configuration
//!
//! ```text
//! set -g status-left  "#(tmux-status left #S)"
//! set -g status-right "#(tmux-status right)"
//! ```
//!
//! ## Exit Codes
//!
//! - `0` - status text written to stdout
//! - `1` - bad arguments, or a tmux query failed (nothing is written to stdout)

use tmux_status::logging;
use tmux_status::status::StatusRenderer;
use tmux_status::tmux::{LabelMode, TmuxCommand};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;

/// tmux-status - Powerline-style tmux status line segments
#[derive(Parser, Debug)]
#[command(name = "tmux-status")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render tmux status-left / status-right segments", long_about = None)]
struct Args {
    #[command(subcommand)]
    segment: Segment,

    /// tmux binary to query
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "TMUX_STATUS_TMUX",
        default_value = "tmux"
    )]
    tmux: PathBuf,

    /// How window labels are built
    #[arg(long, global = true, value_enum, default_value_t = Labels::Auto)]
    labels: Labels,

    /// Log tmux queries to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Segment {
    /// Session badge followed by the window list
    Left {
        /// Session to render (defaults to the current session)
        session: Option<String>,
    },
    /// Clock and hostname
    Right,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Labels {
    /// `command` for a named session, `name` for the current one
    Auto,
    /// Window name
    Name,
    /// Running command and working directory of the active pane
    Command,
}

impl Labels {
    fn mode(self) -> Option<LabelMode> {
        match self {
            Labels::Auto => None,
            Labels::Name => Some(LabelMode::Name),
            Labels::Command => Some(LabelMode::Command),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = parse_args();
    logging::init_logging(args.verbose);

    let output = run(args).await?;

    // Single write; tmux shows whatever arrives, so never emit a partial line
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write status to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(())
}

/// Parse arguments, printing clap's usage to stderr and exiting with status 1
/// on a usage error.
///
/// clap exits with 2 by default; tmux status scripts conventionally use 1.
fn parse_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        // --help and --version go to stdout and are not errors
        std::process::exit(if e.use_stderr() { 1 } else { 0 });
    })
}

async fn run(args: Args) -> Result<String> {
    let tmux = TmuxCommand::new(args.tmux);
    let renderer = match args.labels.mode() {
        Some(mode) => StatusRenderer::with_labels(tmux, mode),
        None => StatusRenderer::new(tmux),
    };

    match args.segment {
        Segment::Left { session } => renderer
            .render_left(session.as_deref())
            .await
            .context("Failed to render left status"),
        Segment::Right => Ok(renderer.render_right()),
    }
}
