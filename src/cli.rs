//! CLI argument parsing for the review workflow.
//!
//! The CLI is intentionally thin: every command maps to one workflow
//! function, so the same session state machine can be driven interactively
//! or from scripts.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default batch page size when initializing a session.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Root CLI entrypoint for the relevance-review workflow.
#[derive(Parser, Debug)]
#[command(
    name = "relrev",
    version,
    about = "Relevance-feedback review flow for snippet batches",
    after_help = "Commands:\n  init --session <file> --document <id> --snippet <id>  Create a fresh session\n  review --candidates <file> --session <file>           Review a batch in the TUI\n  judge --session <file> --snippet <id> --relevant yes  Record one judgment\n  commit --session <file>                               Commit the batch, print targets\n  status --session <file>                               Summarize the session\n\nExamples:\n  relrev init --session review.json --document d1 --snippet d1_paragraph_1 --size 10\n  relrev review --candidates candidates.json --session review.json\n  relrev judge --session review.json --snippet d1_paragraph_4 --relevant maybe\n  relrev commit --session review.json\n  relrev status --session review.json --json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level workflow commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Init(InitArgs),
    Review(ReviewArgs),
    Judge(JudgeArgs),
    Commit(CommitArgs),
    Status(StatusArgs),
}

/// Init command inputs for creating a session file.
#[derive(Parser, Debug)]
#[command(about = "Create a fresh review-session file")]
pub struct InitArgs {
    /// Session file to create
    #[arg(long, value_name = "FILE")]
    pub session: PathBuf,

    /// Reference document the candidates were retrieved for
    #[arg(long, value_name = "ID")]
    pub document: String,

    /// Reference snippet used for the "more like this" lookup
    #[arg(long, value_name = "ID")]
    pub snippet: String,

    /// Batch page size
    #[arg(long, value_name = "N", default_value_t = DEFAULT_BATCH_SIZE)]
    pub size: usize,

    /// Search query the review session branched from
    #[arg(long, value_name = "QUERY", default_value = "")]
    pub search: String,

    /// Overwrite an existing session file
    #[arg(long)]
    pub force: bool,
}

/// Review command inputs for the interactive TUI.
#[derive(Parser, Debug)]
#[command(about = "Review a batch of candidate snippets interactively")]
pub struct ReviewArgs {
    /// Candidates file produced by the retrieval backend
    #[arg(long, value_name = "FILE")]
    pub candidates: PathBuf,

    /// Session file holding judgments and the commit flag
    #[arg(long, value_name = "FILE")]
    pub session: PathBuf,
}

/// Judge command inputs for recording one judgment non-interactively.
#[derive(Parser, Debug)]
#[command(about = "Record one relevance judgment in a session")]
pub struct JudgeArgs {
    /// Session file holding judgments and the commit flag
    #[arg(long, value_name = "FILE")]
    pub session: PathBuf,

    /// Snippet to judge
    #[arg(long, value_name = "ID")]
    pub snippet: String,

    /// Relevance decision: yes, no, or maybe
    #[arg(long, value_name = "JUDGMENT")]
    pub relevant: String,
}

/// Commit command inputs for finalizing a batch.
#[derive(Parser, Debug)]
#[command(about = "Commit the current batch and print follow-up targets")]
pub struct CommitArgs {
    /// Session file holding judgments and the commit flag
    #[arg(long, value_name = "FILE")]
    pub session: PathBuf,
}

/// Status command inputs for summarizing a session.
#[derive(Parser, Debug)]
#[command(about = "Summarize a review session")]
pub struct StatusArgs {
    /// Session file holding judgments and the commit flag
    #[arg(long, value_name = "FILE")]
    pub session: PathBuf,

    /// Emit machine-readable JSON output
    #[arg(long)]
    pub json: bool,

    /// List every judgment instead of only the counts
    #[arg(long)]
    pub full: bool,
}
