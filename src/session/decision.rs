//! Post-commit decision point.
use super::routes::{self, Navigator};
use super::types::SessionContext;

/// Follow-up menu offered once a batch has been committed.
///
/// Two states: `Hidden` until the session's commit latch is set, then
/// `Visible`. While hidden, nothing is rendered and no target is computed.
/// The component defines no transition back; teardown is the owner's move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionPoint {
    Hidden,
    Visible(DecisionMenu),
}

impl DecisionPoint {
    /// Gate on the commit flag. An uncommitted session yields `Hidden`.
    pub fn new(
        committed: bool,
        document_id: &str,
        snippet_id: &str,
        from: usize,
        context: &SessionContext,
    ) -> Self {
        if !committed {
            return DecisionPoint::Hidden;
        }
        DecisionPoint::Visible(DecisionMenu {
            document_id: document_id.to_string(),
            snippet_id: snippet_id.to_string(),
            from,
            context: context.clone(),
        })
    }

    pub fn menu(&self) -> Option<&DecisionMenu> {
        match self {
            DecisionPoint::Hidden => None,
            DecisionPoint::Visible(menu) => Some(menu),
        }
    }
}

/// The three mutually exclusive follow-up actions. Each one computes its
/// navigation target and delegates exactly one route change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionMenu {
    document_id: String,
    snippet_id: String,
    from: usize,
    context: SessionContext,
}

impl DecisionMenu {
    /// Target of "query more snippets": the next batch window, exactly one
    /// batch size further. The sum is not clamped; offset validity is the
    /// navigation target's concern.
    pub fn query_more_target(&self) -> String {
        routes::snippet_batch_path(
            &self.document_id,
            &self.snippet_id,
            self.from + self.context.more_like_this_size,
        )
    }

    /// Target of "return to seed set", independent of all other inputs.
    pub fn seed_set_target(&self) -> String {
        routes::SEED_SET_PATH.to_string()
    }

    /// Target of "new search": carries the current query when non-empty.
    pub fn new_search_target(&self) -> String {
        routes::search_path(&self.context.search)
    }

    /// Review another batch of snippets.
    pub fn query_more(&self, navigator: &mut dyn Navigator) {
        navigator.push(&self.query_more_target());
    }

    /// Return to the seed document set.
    pub fn seed_set(&self, navigator: &mut dyn Navigator) {
        navigator.push(&self.seed_set_target());
    }

    /// Start a new search.
    pub fn new_search(&self, navigator: &mut dyn Navigator) {
        navigator.push(&self.new_search_target());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::RouteLog;

    fn context(size: usize, search: &str) -> SessionContext {
        SessionContext {
            more_like_this_size: size,
            search: search.to_string(),
        }
    }

    #[test]
    fn uncommitted_session_stays_hidden() {
        let point = DecisionPoint::new(false, "d1", "s1", 40, &context(20, "q"));
        assert_eq!(point, DecisionPoint::Hidden);
        assert!(point.menu().is_none());
    }

    #[test]
    fn query_more_advances_exactly_one_batch_size() {
        let point = DecisionPoint::new(true, "d1", "s1", 0, &context(20, ""));
        let menu = point.menu().expect("visible after commit");
        assert_eq!(
            menu.query_more_target(),
            "/documents/d1/snippets/s1/from/20/"
        );

        let point = DecisionPoint::new(true, "d1", "s1", 40, &context(20, ""));
        let menu = point.menu().expect("visible after commit");
        assert_eq!(
            menu.query_more_target(),
            "/documents/d1/snippets/s1/from/60/"
        );
    }

    #[test]
    fn seed_set_target_ignores_all_other_inputs() {
        for (from, search) in [(0, ""), (40, "contract law"), (999, "x")] {
            let point = DecisionPoint::new(true, "doc", "snip", from, &context(7, search));
            assert_eq!(point.menu().expect("visible").seed_set_target(), "/seedset/");
        }
    }

    #[test]
    fn new_search_target_drops_empty_query() {
        let point = DecisionPoint::new(true, "d1", "s1", 0, &context(10, ""));
        assert_eq!(point.menu().expect("visible").new_search_target(), "/search/");

        let point = DecisionPoint::new(true, "d1", "s1", 0, &context(10, "contract law"));
        assert_eq!(
            point.menu().expect("visible").new_search_target(),
            "/search/contract law/"
        );
    }

    #[test]
    fn each_action_delegates_exactly_one_navigation() {
        let point = DecisionPoint::new(true, "d1", "s1", 10, &context(10, "q"));
        let menu = point.menu().expect("visible");

        let mut log = RouteLog::new();
        menu.query_more(&mut log);
        assert_eq!(log.paths(), ["/documents/d1/snippets/s1/from/20/"]);

        menu.seed_set(&mut log);
        menu.new_search(&mut log);
        assert_eq!(
            log.paths(),
            [
                "/documents/d1/snippets/s1/from/20/",
                "/seedset/",
                "/search/q/",
            ]
        );
    }
}
