//! Core data model for the relevance-feedback review flow.
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The user's relevance decision for exactly one snippet.
///
/// The set is closed. "No decision yet" is represented externally as
/// `Option<Judgment>`, never as a fourth variant.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Judgment {
    Yes,
    No,
    Maybe,
}

impl Judgment {
    /// Display order of the three choice controls.
    pub const ALL: [Judgment; 3] = [Judgment::Yes, Judgment::No, Judgment::Maybe];

    /// Stable string identifier used in session JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Judgment::Yes => "yes",
            Judgment::No => "no",
            Judgment::Maybe => "maybe",
        }
    }

    /// Fixed control label in the review screen.
    pub fn label(&self) -> &'static str {
        match self {
            Judgment::Yes => "Yes",
            Judgment::No => "No",
            Judgment::Maybe => "Maybe",
        }
    }
}

impl fmt::Display for Judgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Judgment {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "yes" => Ok(Judgment::Yes),
            "no" => Ok(Judgment::No),
            "maybe" => Ok(Judgment::Maybe),
            _ => Err(anyhow!(
                "unknown judgment: {raw} (expected yes, no, or maybe)"
            )),
        }
    }
}

/// A text snippet retrieved as a "more like this" candidate.
///
/// Immutable for the lifetime of a review screen; supplied by the retrieval
/// backend via the candidates file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Snippet {
    /// Opaque snippet identifier, unique within the candidate set.
    pub id: String,
    /// Identifier of the document the snippet belongs to.
    pub document: String,
    /// Display text of the snippet.
    pub text: String,
}

/// Judgments accumulated by the session controller, keyed by snippet id.
pub type JudgmentMapping = BTreeMap<String, Judgment>;

/// Session-wide settings shared across batches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    /// Page size for snippet batches. Positive; enforced at the file boundary.
    pub more_like_this_size: usize,
    /// Current search query, possibly empty.
    pub search: String,
}

/// Mutable state of one review-session instance.
///
/// `committed` is a one-way latch: once set it never clears. A follow-up
/// batch runs as a fresh instance with a new offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSession {
    /// Reference document the candidates were retrieved for.
    pub document_id: String,
    /// Reference snippet used for the "more like this" lookup.
    pub snippet_id: String,
    /// Pagination offset of the current batch.
    pub from: usize,
    judgments: JudgmentMapping,
    committed: bool,
}

impl ReviewSession {
    /// Build an instance from controller state; a fresh session starts at
    /// offset 0 with an empty mapping and the latch clear.
    pub fn from_parts(
        document_id: &str,
        snippet_id: &str,
        from: usize,
        judgments: JudgmentMapping,
        committed: bool,
    ) -> Self {
        Self {
            document_id: document_id.to_string(),
            snippet_id: snippet_id.to_string(),
            from,
            judgments,
            committed,
        }
    }

    /// Record one judgment event. Keys stay unique; the last write per
    /// snippet wins.
    pub fn record(&mut self, id: &str, judgment: Judgment) {
        self.judgments.insert(id.to_string(), judgment);
    }

    /// Current judgment for a snippet, if the user has set one.
    pub fn judgment(&self, id: &str) -> Option<Judgment> {
        self.judgments.get(id).copied()
    }

    pub fn judgments(&self) -> &JudgmentMapping {
        &self.judgments
    }

    /// Flip the commit latch. Returns false when the latch was already set;
    /// the flag never transitions back.
    pub fn commit(&mut self) -> bool {
        if self.committed {
            return false;
        }
        self.committed = true;
        true
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
