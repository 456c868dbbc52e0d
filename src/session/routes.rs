//! Navigation target paths and the router boundary.
//!
//! The review flow produces exactly three path shapes. Building them lives
//! here, next to the parser the surrounding application uses to follow them.
use anyhow::{anyhow, Context, Result};

/// Fixed target for returning to the seed document set.
pub const SEED_SET_PATH: &str = "/seedset/";

/// Target for the batch of "more like this" candidates starting at `from`.
pub fn snippet_batch_path(document_id: &str, snippet_id: &str, from: usize) -> String {
    format!("/documents/{document_id}/snippets/{snippet_id}/from/{from}/")
}

/// Target for a new search; the bare search page when the query is empty.
pub fn search_path(search: &str) -> String {
    if search.is_empty() {
        "/search/".to_string()
    } else {
        format!("/search/{search}/")
    }
}

/// Client-side route change, performed by the surrounding application.
/// Navigation failures are the implementor's concern.
pub trait Navigator {
    fn push(&mut self, path: &str);
}

/// Navigator that records pushed paths for later inspection.
#[derive(Debug, Default)]
pub struct RouteLog {
    paths: Vec<String>,
}

impl RouteLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushed paths, oldest first.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }
}

impl Navigator for RouteLog {
    fn push(&mut self, path: &str) {
        self.paths.push(path.to_string());
    }
}

/// Structured form of the three produced path shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    SnippetBatch {
        document_id: String,
        snippet_id: String,
        from: usize,
    },
    SeedSet,
    Search {
        query: String,
    },
}

impl Route {
    /// Parse a produced target path back into its structured form.
    pub fn parse(path: &str) -> Result<Route> {
        let rest = path
            .strip_prefix('/')
            .ok_or_else(|| anyhow!("target path must be absolute: {path}"))?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        if rest == "seedset" {
            return Ok(Route::SeedSet);
        }
        if rest == "search" {
            return Ok(Route::Search {
                query: String::new(),
            });
        }
        if let Some(query) = rest.strip_prefix("search/") {
            return Ok(Route::Search {
                query: query.to_string(),
            });
        }

        let segments: Vec<&str> = rest.split('/').collect();
        if let ["documents", document_id, "snippets", snippet_id, "from", from] =
            segments.as_slice()
        {
            let from = from
                .parse::<usize>()
                .with_context(|| format!("parse batch offset in {path}"))?;
            return Ok(Route::SnippetBatch {
                document_id: (*document_id).to_string(),
                snippet_id: (*snippet_id).to_string(),
                from,
            });
        }

        Err(anyhow!("unrecognized target path: {path}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_batch_path_shape() {
        assert_eq!(
            snippet_batch_path("d1", "s1", 10),
            "/documents/d1/snippets/s1/from/10/"
        );
    }

    #[test]
    fn search_path_omits_empty_query_segment() {
        assert_eq!(search_path(""), "/search/");
        assert_eq!(search_path("contract law"), "/search/contract law/");
    }

    #[test]
    fn parse_roundtrips_all_three_shapes() {
        let batch = Route::parse("/documents/d1/snippets/s1/from/60/").expect("batch route");
        assert_eq!(
            batch,
            Route::SnippetBatch {
                document_id: "d1".to_string(),
                snippet_id: "s1".to_string(),
                from: 60,
            }
        );
        assert_eq!(Route::parse("/seedset/").expect("seed route"), Route::SeedSet);
        assert_eq!(
            Route::parse("/search/").expect("bare search route"),
            Route::Search {
                query: String::new()
            }
        );
        assert_eq!(
            Route::parse("/search/contract law/").expect("search route"),
            Route::Search {
                query: "contract law".to_string()
            }
        );
    }

    #[test]
    fn parse_rejects_unknown_shapes() {
        assert!(Route::parse("documents/d1/").is_err());
        assert!(Route::parse("/documents/d1/snippets/s1/from/ten/").is_err());
        assert!(Route::parse("/profile/").is_err());
    }

    #[test]
    fn route_log_records_in_order() {
        let mut log = RouteLog::new();
        assert!(log.paths().is_empty());
        log.push("/seedset/");
        log.push("/search/");
        assert_eq!(log.paths(), ["/seedset/", "/search/"]);
    }
}
