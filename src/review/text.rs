use super::format::{marker, preview_text, readable_id};
use crate::session::{CandidatesFile, Judgment, JudgmentCapture, SessionFile};
use anyhow::Result;

pub(super) fn run_text_summary(candidates: &CandidatesFile, file: &SessionFile) -> Result<()> {
    let session = file.session();
    let batch = candidates.batch(file.from, file.size);

    println!("document: {}", file.document_id);
    println!("reference: {}", readable_id(&file.snippet_id));
    println!(
        "batch: from {} size {} ({} candidates total)",
        file.from,
        file.size,
        candidates.candidates.len()
    );
    println!("committed: {}", file.committed);
    println!();

    for snippet in batch {
        let capture = JudgmentCapture::new(snippet, session.judgment(&snippet.id));
        let options = Judgment::ALL
            .iter()
            .map(|option| format!("{} {}", marker(capture.is_active(*option)), option.label()))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}  {}", readable_id(capture.id()), options);
        println!("  {}", preview_text(capture.text()));
    }
    Ok(())
}
