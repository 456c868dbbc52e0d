//! Persistence and navigation actions for the review TUI.
use super::App;
use crate::session::{self, DecisionMenu, Navigator, Route, RouteLog};
use anyhow::{anyhow, Result};

impl App {
    /// Write the current controller state to the session file.
    pub(in crate::review) fn save(&mut self) -> Result<()> {
        self.file.absorb(&self.session);
        session::write_session(&self.session_path, &self.file)
    }

    /// Commit the batch. The latch only moves once; a re-commit is a no-op.
    pub(in crate::review) fn commit(&mut self) -> Result<()> {
        if !self.session.commit() {
            self.set_message("already committed".to_string());
            return Ok(());
        }
        self.save()?;
        tracing::info!(judgments = self.session.judgments().len(), "batch committed");
        self.set_message("answers saved; pick a follow-up action".to_string());
        Ok(())
    }

    /// Review another batch of snippets.
    pub(in crate::review) fn query_more(&mut self) -> Result<()> {
        self.follow(DecisionMenu::query_more)
    }

    /// Return to the seed document set.
    pub(in crate::review) fn return_to_seed_set(&mut self) -> Result<()> {
        self.follow(DecisionMenu::seed_set)
    }

    /// Start a new search.
    pub(in crate::review) fn start_new_search(&mut self) -> Result<()> {
        self.follow(DecisionMenu::new_search)
    }

    /// Let the decision point compute the target, then follow the route the
    /// navigator received.
    fn follow(&mut self, action: fn(&DecisionMenu, &mut dyn Navigator)) -> Result<()> {
        let decision = self.decision();
        let Some(menu) = decision.menu() else {
            return Err(anyhow!("batch not committed yet"));
        };
        let mut log = RouteLog::new();
        action(menu, &mut log);
        let target = log
            .paths()
            .last()
            .ok_or_else(|| anyhow!("no navigation target recorded"))?
            .to_string();

        match Route::parse(&target)? {
            Route::SnippetBatch { from, .. } => {
                // Fresh session instance for the next batch: judgments carry
                // over, the commit latch starts clear.
                self.file.absorb(&self.session);
                self.file.from = from;
                self.file.committed = false;
                self.session = self.file.session();
                self.selection = 0;
                session::write_session(&self.session_path, &self.file)?;
                tracing::info!(from, "advanced to next batch");
                self.set_message(format!("batch from {from}"));
            }
            Route::SeedSet | Route::Search { .. } => {
                self.file.absorb(&self.session);
                self.file.target = Some(target.clone());
                session::write_session(&self.session_path, &self.file)?;
                tracing::info!(target = %target, "leaving review");
                self.outcome = Some(target);
            }
        }
        Ok(())
    }
}
