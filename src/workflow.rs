//! Command implementations for the review workflow.
//!
//! Each function is the session controller for one command: it owns the
//! durable session state, feeds snapshots to the capture and decision
//! components, and persists the outcome.
use crate::cli::{CommitArgs, InitArgs, JudgeArgs, ReviewArgs, StatusArgs};
use crate::review;
use crate::session::{self, DecisionPoint, Judgment, SessionFile};
use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::cmp::Ordering;

pub fn run_init(args: InitArgs) -> Result<()> {
    if args.session.is_file() && !args.force {
        return Err(anyhow!(
            "session already exists at {} (use --force to overwrite)",
            args.session.display()
        ));
    }
    if args.size == 0 {
        return Err(anyhow!("--size must be positive"));
    }
    if args.document.is_empty() || args.snippet.is_empty() {
        return Err(anyhow!("--document and --snippet must be non-empty"));
    }
    let file = SessionFile::new(&args.document, &args.snippet, args.size, &args.search);
    session::write_session(&args.session, &file)?;
    println!("wrote {}", args.session.display());
    Ok(())
}

pub fn run_review(args: ReviewArgs) -> Result<()> {
    review::run(&args)
}

pub fn run_judge(args: JudgeArgs) -> Result<()> {
    let mut file = session::load_session(&args.session)?;
    if file.committed {
        return Err(anyhow!(
            "session already committed; judgments are final (start a new batch to continue)"
        ));
    }
    let judgment = args.relevant.parse::<Judgment>()?;

    let mut instance = file.session();
    instance.record(&args.snippet, judgment);
    file.absorb(&instance);
    session::write_session(&args.session, &file)?;
    tracing::debug!(snippet = %args.snippet, judgment = %judgment, "judgment recorded");
    println!("{}: {}", args.snippet, judgment);
    Ok(())
}

pub fn run_commit(args: CommitArgs) -> Result<()> {
    let mut file = session::load_session(&args.session)?;
    let mut instance = file.session();
    if instance.commit() {
        file.absorb(&instance);
        session::write_session(&args.session, &file)?;
        tracing::info!(judgments = file.judgments.len(), "batch committed");
        println!("committed {} judgments", file.judgments.len());
    } else {
        println!("session already committed");
    }

    let decision = DecisionPoint::new(
        file.committed,
        &file.document_id,
        &file.snippet_id,
        file.from,
        &file.context(),
    );
    let menu = decision
        .menu()
        .ok_or_else(|| anyhow!("decision point hidden after commit"))?;
    println!("follow-up targets:");
    println!("  query more: {}", menu.query_more_target());
    println!("  seed set:   {}", menu.seed_set_target());
    println!("  new search: {}", menu.new_search_target());
    Ok(())
}

pub fn run_status(args: StatusArgs) -> Result<()> {
    let file = session::load_session(&args.session)?;
    let summary = build_status_summary(&file);

    if args.json {
        let text = serde_json::to_string_pretty(&summary).context("serialize status summary")?;
        println!("{text}");
        return Ok(());
    }

    println!("document: {}", summary.document_id);
    println!("snippet: {}", summary.snippet_id);
    println!("batch: from {} size {}", summary.from, summary.size);
    println!(
        "search: {}",
        if summary.search.is_empty() {
            "<none>"
        } else {
            &summary.search
        }
    );
    println!(
        "judgments: {} (yes {}, no {}, maybe {})",
        summary.judged, summary.yes, summary.no, summary.maybe
    );
    println!("committed: {}", summary.committed);
    if let Some(target) = &summary.target {
        println!("target: {target}");
    }
    if let Some(next) = &summary.next_targets {
        println!("follow-up targets:");
        println!("  query more: {}", next.query_more);
        println!("  seed set:   {}", next.seed_set);
        println!("  new search: {}", next.new_search);
    }
    if args.full {
        let mut ids: Vec<&String> = file.judgments.keys().collect();
        ids.sort_by(|a, b| natural_cmp(a, b));
        for id in ids {
            println!("  {id}: {}", file.judgments[id]);
        }
    }
    Ok(())
}

/// Machine-readable session summary emitted by `status --json`.
#[derive(Debug, Serialize)]
pub struct StatusSummary {
    pub document_id: String,
    pub snippet_id: String,
    pub from: usize,
    pub size: usize,
    pub search: String,
    pub yes: usize,
    pub no: usize,
    pub maybe: usize,
    pub judged: usize,
    pub committed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_targets: Option<NextTargets>,
}

/// The three follow-up targets available once a session is committed.
#[derive(Debug, Serialize)]
pub struct NextTargets {
    pub query_more: String,
    pub seed_set: String,
    pub new_search: String,
}

fn build_status_summary(file: &SessionFile) -> StatusSummary {
    let count = |judgment: Judgment| {
        file.judgments
            .values()
            .filter(|value| **value == judgment)
            .count()
    };
    let decision = DecisionPoint::new(
        file.committed,
        &file.document_id,
        &file.snippet_id,
        file.from,
        &file.context(),
    );
    let next_targets = decision.menu().map(|menu| NextTargets {
        query_more: menu.query_more_target(),
        seed_set: menu.seed_set_target(),
        new_search: menu.new_search_target(),
    });
    StatusSummary {
        document_id: file.document_id.clone(),
        snippet_id: file.snippet_id.clone(),
        from: file.from,
        size: file.size,
        search: file.search.clone(),
        yes: count(Judgment::Yes),
        no: count(Judgment::No),
        maybe: count(Judgment::Maybe),
        judged: file.judgments.len(),
        committed: file.committed,
        target: file.target.clone(),
        next_targets,
    }
}

/// Compare snippet ids naturally: numeric segments compare as numbers, so
/// `d1_paragraph_2` sorts before `d1_paragraph_10`.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = natural_parts(a).into_iter();
    let mut right = natural_parts(b).into_iter();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ordering = match (x.parse::<u64>(), y.parse::<u64>()) {
                    (Ok(m), Ok(n)) => m.cmp(&n),
                    _ => x.cmp(y),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

fn natural_parts(id: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_digits = false;
    for (idx, ch) in id.char_indices() {
        let digit = ch.is_ascii_digit();
        if idx > 0 && digit != in_digits {
            parts.push(&id[start..idx]);
            start = idx;
        }
        in_digits = digit;
    }
    if start < id.len() {
        parts.push(&id[start..]);
    }
    parts
}
