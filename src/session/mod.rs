//! Review-session state machine and its collaborators' boundaries.
//!
//! The session module centralizes the judgment data model, the per-snippet
//! capture component, the post-commit decision point, and the navigation
//! paths they produce. All mutable state is owned by the session controller;
//! the components here read snapshots of it and emit events upward.

/// Current schema version for session files.
pub const SESSION_SCHEMA_VERSION: u32 = 1;
/// Current schema version for candidates files.
pub const CANDIDATES_SCHEMA_VERSION: u32 = 1;

mod capture;
mod decision;
mod routes;
mod store;
mod types;

pub use capture::JudgmentCapture;
pub use decision::{DecisionMenu, DecisionPoint};
pub use routes::{search_path, snippet_batch_path, Navigator, Route, RouteLog, SEED_SET_PATH};
pub use store::{load_candidates, load_session, write_session, CandidatesFile, SessionFile};
pub use types::{Judgment, JudgmentMapping, ReviewSession, SessionContext, Snippet};
