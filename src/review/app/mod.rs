mod actions;
mod state;
mod view;

use crate::session::{CandidatesFile, ReviewSession, SessionContext, SessionFile};
use std::path::PathBuf;

pub(super) struct App {
    session_path: PathBuf,
    candidates: CandidatesFile,
    file: SessionFile,
    session: ReviewSession,
    context: SessionContext,
    selection: usize,
    message: Option<String>,
    show_help: bool,
    /// Target of the decision-point action that ended the session, if any.
    outcome: Option<String>,
}
