//! Loading and consistency checks for review inputs.
use crate::session::{self, CandidatesFile, SessionFile};
use anyhow::{anyhow, Result};
use std::path::Path;

/// Load the candidates and session pair, refusing mismatched references.
pub(super) fn load_review(
    candidates_path: &Path,
    session_path: &Path,
) -> Result<(CandidatesFile, SessionFile)> {
    let candidates = session::load_candidates(candidates_path)?;
    let file = session::load_session(session_path)?;
    if candidates.document_id != file.document_id || candidates.snippet_id != file.snippet_id {
        return Err(anyhow!(
            "candidates for {}/{} do not match session for {}/{}",
            candidates.document_id,
            candidates.snippet_id,
            file.document_id,
            file.snippet_id
        ));
    }
    tracing::debug!(
        candidates = candidates.candidates.len(),
        from = file.from,
        "review inputs loaded"
    );
    Ok((candidates, file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{write_session, CANDIDATES_SCHEMA_VERSION};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn mismatched_references_are_refused() {
        let dir = TempDir::new().expect("create temp dir");
        let candidates_path = dir.path().join("candidates.json");
        let session_path = dir.path().join("session.json");

        let candidates = serde_json::json!({
            "schema_version": CANDIDATES_SCHEMA_VERSION,
            "document_id": "d1",
            "snippet_id": "s1",
            "candidates": [],
        });
        fs::write(&candidates_path, candidates.to_string()).expect("write candidates");
        write_session(&session_path, &SessionFile::new("d2", "s1", 10, ""))
            .expect("write session");

        assert!(load_review(&candidates_path, &session_path).is_err());
    }

    #[test]
    fn matching_references_load() {
        let dir = TempDir::new().expect("create temp dir");
        let candidates_path = dir.path().join("candidates.json");
        let session_path = dir.path().join("session.json");

        let candidates = serde_json::json!({
            "schema_version": CANDIDATES_SCHEMA_VERSION,
            "document_id": "d1",
            "snippet_id": "s1",
            "candidates": [
                {"id": "d1_paragraph_1", "document": "d1", "text": "first"},
            ],
        });
        fs::write(&candidates_path, candidates.to_string()).expect("write candidates");
        write_session(&session_path, &SessionFile::new("d1", "s1", 10, ""))
            .expect("write session");

        let (candidates, file) =
            load_review(&candidates_path, &session_path).expect("load review inputs");
        assert_eq!(candidates.candidates.len(), 1);
        assert_eq!(file.document_id, "d1");
    }
}
