//! Per-snippet judgment capture.
use super::types::{Judgment, Snippet};

/// Capture surface for one snippet: identity, display text, and the current
/// externally supplied judgment.
///
/// The component never holds judgment state of its own. Each select
/// operation relays exactly one `(id, judgment)` event to the owning
/// controller, also when the same value is re-selected.
#[derive(Debug, Clone, Copy)]
pub struct JudgmentCapture<'a> {
    snippet: &'a Snippet,
    relevant: Option<Judgment>,
}

impl<'a> JudgmentCapture<'a> {
    pub fn new(snippet: &'a Snippet, relevant: Option<Judgment>) -> Self {
        Self { snippet, relevant }
    }

    pub fn id(&self) -> &'a str {
        &self.snippet.id
    }

    pub fn text(&self) -> &'a str {
        &self.snippet.text
    }

    /// Display rule: the control for `option` is marked active iff it
    /// matches the supplied judgment. With no judgment, none are active.
    pub fn is_active(&self, option: Judgment) -> bool {
        self.relevant == Some(option)
    }

    /// Relay a selection to the controller.
    pub fn select(&self, judgment: Judgment, on_select: &mut dyn FnMut(&str, Judgment)) {
        on_select(&self.snippet.id, judgment);
    }

    pub fn select_yes(&self, on_select: &mut dyn FnMut(&str, Judgment)) {
        self.select(Judgment::Yes, on_select);
    }

    pub fn select_no(&self, on_select: &mut dyn FnMut(&str, Judgment)) {
        self.select(Judgment::No, on_select);
    }

    pub fn select_maybe(&self, on_select: &mut dyn FnMut(&str, Judgment)) {
        self.select(Judgment::Maybe, on_select);
    }
}
