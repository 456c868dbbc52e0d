//! Application state management for the review TUI.
//!
//! The app is the session controller: it owns the session instance and the
//! durable file, and routes every judgment event through the capture
//! component before recording it.
use super::App;
use crate::session::{
    CandidatesFile, DecisionPoint, Judgment, JudgmentCapture, SessionFile, Snippet,
};
use std::path::PathBuf;

impl App {
    pub(in crate::review) fn new(
        session_path: PathBuf,
        candidates: CandidatesFile,
        file: SessionFile,
    ) -> Self {
        let session = file.session();
        let context = file.context();
        Self {
            session_path,
            candidates,
            file,
            session,
            context,
            selection: 0,
            message: None,
            show_help: false,
            outcome: None,
        }
    }

    /// Snippets of the current batch window.
    pub(in crate::review) fn batch(&self) -> &[Snippet] {
        self.candidates
            .batch(self.session.from, self.context.more_like_this_size)
    }

    pub(in crate::review) fn move_selection(&mut self, delta: isize) {
        let max = self.batch().len();
        if max == 0 {
            self.selection = 0;
            return;
        }
        let current = self.selection as isize;
        let next = current + delta;
        let clamped = if next < 0 {
            0
        } else if next as usize >= max {
            max as isize - 1
        } else {
            next
        };
        self.selection = clamped as usize;
    }

    /// Judge the selected snippet. The capture component relays the event;
    /// the controller records it. Re-selecting the current value fires too.
    pub(in crate::review) fn judge(&mut self, judgment: Judgment) {
        if self.session.is_committed() {
            self.set_message("batch committed; pick a follow-up action".to_string());
            return;
        }
        let Some(snippet) = self.batch().get(self.selection).cloned() else {
            self.set_message("no snippet selected".to_string());
            return;
        };
        let capture = JudgmentCapture::new(&snippet, self.session.judgment(&snippet.id));
        let session = &mut self.session;
        let mut sink = |id: &str, value| session.record(id, value);
        match judgment {
            Judgment::Yes => capture.select_yes(&mut sink),
            Judgment::No => capture.select_no(&mut sink),
            Judgment::Maybe => capture.select_maybe(&mut sink),
        }
        self.message = Some(format!("{}: {judgment}", snippet.id));
    }

    pub(in crate::review) fn judged_in_batch(&self) -> usize {
        self.batch()
            .iter()
            .filter(|snippet| self.session.judgment(&snippet.id).is_some())
            .count()
    }

    /// The decision point, gated by the session's commit latch.
    pub(in crate::review) fn decision(&self) -> DecisionPoint {
        DecisionPoint::new(
            self.session.is_committed(),
            &self.session.document_id,
            &self.session.snippet_id,
            self.session.from,
            &self.context,
        )
    }

    pub(in crate::review) fn is_decision_visible(&self) -> bool {
        self.session.is_committed()
    }

    pub(in crate::review) fn is_help_visible(&self) -> bool {
        self.show_help
    }

    pub(in crate::review) fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub(in crate::review) fn set_message(&mut self, message: String) {
        self.message = Some(message);
    }

    pub(in crate::review) fn outcome(&self) -> Option<&str> {
        self.outcome.as_deref()
    }
}
