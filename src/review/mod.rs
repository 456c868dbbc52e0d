//! Interactive review screen for one candidate batch.
//!
//! Review drives the session state machine from the terminal: judge the
//! snippets of the current batch, commit, then follow one of the three
//! decision-point actions. "Query more snippets" continues in-process with
//! the next batch window; the other two actions end the session with the
//! chosen target recorded in the session file.
mod app;
mod data;
mod format;
mod terminal;
mod text;
mod ui;

use crate::cli::ReviewArgs;
use anyhow::Result;
use std::io::{self, IsTerminal};

const EVENT_POLL_MS: u64 = 200;
const PREVIEW_MAX_LINES: usize = 2;
const PREVIEW_MAX_CHARS: usize = 160;

/// Run the review screen, falling back to a text summary for non-TTY
/// environments.
pub fn run(args: &ReviewArgs) -> Result<()> {
    let (candidates, session) = data::load_review(&args.candidates, &args.session)?;
    if !io::stdout().is_terminal() || !io::stdin().is_terminal() {
        return text::run_text_summary(&candidates, &session);
    }
    ui::run_tui(args.session.clone(), candidates, session)
}
