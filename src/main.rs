use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod review;
mod session;
mod workflow;

use cli::{Command, RootArgs};

fn main() -> Result<()> {
    // Logs go to stderr so the TUI and JSON outputs own stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = RootArgs::parse();
    match args.command {
        Command::Init(args) => workflow::run_init(args),
        Command::Review(args) => workflow::run_review(args),
        Command::Judge(args) => workflow::run_judge(args),
        Command::Commit(args) => workflow::run_commit(args),
        Command::Status(args) => workflow::run_status(args),
    }
}
