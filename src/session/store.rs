//! Candidates and session file persistence.
//!
//! Both artifacts are small pretty-printed JSON files with explicit schema
//! versions, rewritten whole on every change.
use super::types::{JudgmentMapping, ReviewSession, SessionContext, Snippet};
use super::{CANDIDATES_SCHEMA_VERSION, SESSION_SCHEMA_VERSION};
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::cmp::min;
use std::fs;
use std::path::Path;

/// Ranked candidate snippets for one reference document/snippet pair, as
/// produced by the retrieval backend. Array order is rank order.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CandidatesFile {
    pub schema_version: u32,
    pub document_id: String,
    pub snippet_id: String,
    pub candidates: Vec<Snippet>,
}

impl CandidatesFile {
    /// The batch window `[from, from + size)`, truncated at the end of the
    /// candidate list. An offset past the end yields an empty batch.
    pub fn batch(&self, from: usize, size: usize) -> &[Snippet] {
        let start = min(from, self.candidates.len());
        let end = min(from.saturating_add(size), self.candidates.len());
        &self.candidates[start..end]
    }
}

/// Durable session-controller state.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SessionFile {
    pub schema_version: u32,
    pub document_id: String,
    pub snippet_id: String,
    pub from: usize,
    /// Batch page size; positive, checked on load.
    pub size: usize,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub judgments: JudgmentMapping,
    #[serde(default)]
    pub committed: bool,
    /// Navigation target chosen at the decision point, when the session
    /// ended there.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl SessionFile {
    pub fn new(document_id: &str, snippet_id: &str, size: usize, search: &str) -> Self {
        Self {
            schema_version: SESSION_SCHEMA_VERSION,
            document_id: document_id.to_string(),
            snippet_id: snippet_id.to_string(),
            from: 0,
            size,
            search: search.to_string(),
            judgments: JudgmentMapping::new(),
            committed: false,
            target: None,
        }
    }

    /// Materialize the in-memory session instance for the current batch.
    pub fn session(&self) -> ReviewSession {
        ReviewSession::from_parts(
            &self.document_id,
            &self.snippet_id,
            self.from,
            self.judgments.clone(),
            self.committed,
        )
    }

    pub fn context(&self) -> SessionContext {
        SessionContext {
            more_like_this_size: self.size,
            search: self.search.clone(),
        }
    }

    /// Fold an instance's state back into the durable form.
    pub fn absorb(&mut self, session: &ReviewSession) {
        self.from = session.from;
        self.judgments = session.judgments().clone();
        self.committed = session.is_committed();
    }
}

/// Load a candidates file from disk.
pub fn load_candidates(path: &Path) -> Result<CandidatesFile> {
    let bytes =
        fs::read(path).with_context(|| format!("read candidates {}", path.display()))?;
    let file: CandidatesFile =
        serde_json::from_slice(&bytes).context("parse candidates JSON")?;
    if file.schema_version != CANDIDATES_SCHEMA_VERSION {
        return Err(anyhow!(
            "unsupported candidates schema version {} (expected {})",
            file.schema_version,
            CANDIDATES_SCHEMA_VERSION
        ));
    }
    Ok(file)
}

/// Load a session file from disk.
pub fn load_session(path: &Path) -> Result<SessionFile> {
    let bytes = fs::read(path).with_context(|| format!("read session {}", path.display()))?;
    let file: SessionFile = serde_json::from_slice(&bytes).context("parse session JSON")?;
    if file.schema_version != SESSION_SCHEMA_VERSION {
        return Err(anyhow!(
            "unsupported session schema version {} (expected {})",
            file.schema_version,
            SESSION_SCHEMA_VERSION
        ));
    }
    if file.size == 0 {
        return Err(anyhow!("session batch size must be positive"));
    }
    Ok(file)
}

/// Persist the session in a stable JSON format.
pub fn write_session(path: &Path, session: &SessionFile) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
    }
    let text = serde_json::to_string_pretty(session).context("serialize session")?;
    fs::write(path, text.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Judgment;
    use tempfile::TempDir;

    fn snippet(id: &str) -> Snippet {
        Snippet {
            id: id.to_string(),
            document: "d1".to_string(),
            text: format!("text of {id}"),
        }
    }

    fn candidates(count: usize) -> CandidatesFile {
        CandidatesFile {
            schema_version: CANDIDATES_SCHEMA_VERSION,
            document_id: "d1".to_string(),
            snippet_id: "s1".to_string(),
            candidates: (0..count)
                .map(|n| snippet(&format!("d1_paragraph_{n}")))
                .collect(),
        }
    }

    #[test]
    fn batch_windows_truncate_at_the_end() {
        let file = candidates(25);
        assert_eq!(file.batch(0, 10).len(), 10);
        assert_eq!(file.batch(20, 10).len(), 5);
        assert_eq!(file.batch(25, 10).len(), 0);
        assert_eq!(file.batch(400, 10).len(), 0);
        assert_eq!(file.batch(10, 10)[0].id, "d1_paragraph_10");
    }

    #[test]
    fn session_file_roundtrips_through_disk() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("session.json");

        let mut file = SessionFile::new("d1", "s1", 10, "contract law");
        let mut instance = file.session();
        instance.record("d1_paragraph_2", Judgment::Yes);
        assert!(instance.commit());
        file.absorb(&instance);
        file.target = Some("/seedset/".to_string());

        write_session(&path, &file).expect("write session");
        let loaded = load_session(&path).expect("load session");
        assert_eq!(loaded, file);
        assert!(loaded.committed);
        assert_eq!(
            loaded.judgments.get("d1_paragraph_2"),
            Some(&Judgment::Yes)
        );
    }

    #[test]
    fn load_session_rejects_wrong_schema_version() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("session.json");
        let mut file = SessionFile::new("d1", "s1", 10, "");
        file.schema_version = 99;
        let text = serde_json::to_string(&file).expect("serialize");
        fs::write(&path, text).expect("write");

        assert!(load_session(&path).is_err());
    }

    #[test]
    fn load_session_rejects_zero_batch_size() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("session.json");
        let file = SessionFile::new("d1", "s1", 0, "");
        let text = serde_json::to_string(&file).expect("serialize");
        fs::write(&path, text).expect("write");

        assert!(load_session(&path).is_err());
    }

    #[test]
    fn absorb_carries_instance_state_into_the_file() {
        let mut file = SessionFile::new("d1", "s1", 20, "");
        let mut instance = file.session();
        instance.record("a", Judgment::No);
        instance.from = 20;
        file.absorb(&instance);

        assert_eq!(file.from, 20);
        assert!(!file.committed);
        assert_eq!(file.judgments.get("a"), Some(&Judgment::No));
    }
}
