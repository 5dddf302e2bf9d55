//! Path resolution against the route table.
//!
//! # Responsibilities
//! - Walk the tree level by level, consuming leading segments
//! - Apply redirects and restart, detecting cycles
//! - Produce a plan: the chain of views to mount, outermost first
//!
//! # Design Decisions
//! - Pure and synchronous: loading happens afterwards, in the host
//! - First match wins in declaration order, except that a default redirect
//!   (empty path, full match) is tried after its siblings
//! - A parent whose children cannot consume a non-empty remainder yields to
//!   the next sibling (backtracking)
//! - A parent matched with nothing left still consults its children, so an
//!   empty-path default redirect can fire (`/notes` → `/notes/all`)

use std::collections::{BTreeMap, HashSet};

use crate::config::schema::PathMatch;
use crate::routing::path::{NavPath, PathError};
use crate::routing::table::{RouteEntry, RouteTable, RouteTarget};
use crate::views::ViewSource;

/// Why a path could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    InvalidPath(#[from] PathError),

    #[error("no route matches `{path}`")]
    NoMatch { path: NavPath },

    #[error("redirect cycle: {}", format_chain(.chain))]
    RedirectCycle { chain: Vec<NavPath> },

    #[error("more than {limit} redirects starting at `{path}`")]
    TooManyRedirects { path: NavPath, limit: usize },
}

fn format_chain(chain: &[NavPath]) -> String {
    chain
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// One view to mount.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// Route path as declared (`"edit/:id"`).
    pub route: String,
    /// URL consumed up to and including this entry; the base for its tab links.
    pub url: NavPath,
    /// Parameters captured by this entry.
    pub params: BTreeMap<String, String>,
    pub source: ViewSource,
}

/// Resolution result: final URL and the outlet chain.
#[derive(Debug, Clone)]
pub struct RoutePlan {
    /// URL after all redirects.
    pub url: NavPath,
    /// Intermediate redirect targets, in order.
    pub redirects: Vec<NavPath>,
    /// Views to mount, outermost first.
    pub matches: Vec<RouteMatch>,
}

impl RoutePlan {
    pub fn leaf(&self) -> Option<&RouteMatch> {
        self.matches.last()
    }

    /// All captured parameters; inner entries win on name clashes.
    pub fn params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        for m in &self.matches {
            params.extend(m.params.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        params
    }
}

enum LevelOutcome {
    Matched(Vec<RouteMatch>),
    Redirect(NavPath),
}

/// Resolves paths against a route table.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    table: &'a RouteTable,
    max_redirects: usize,
}

impl<'a> Resolver<'a> {
    pub fn new(table: &'a RouteTable, max_redirects: usize) -> Self {
        Self {
            table,
            max_redirects,
        }
    }

    pub fn resolve(&self, path: &str) -> Result<RoutePlan, ResolveError> {
        self.resolve_path(NavPath::parse(path)?)
    }

    pub fn resolve_path(&self, path: NavPath) -> Result<RoutePlan, ResolveError> {
        let start = path.clone();
        let mut current = path;
        let mut chain = vec![current.clone()];
        let mut seen: HashSet<NavPath> = HashSet::from([current.clone()]);

        loop {
            match self.match_level(self.table.roots(), current.segments(), 0)? {
                LevelOutcome::Matched(matches) => {
                    return Ok(RoutePlan {
                        url: current,
                        redirects: chain.split_off(1),
                        matches,
                    });
                }
                LevelOutcome::Redirect(next) => {
                    tracing::debug!(from = %current, to = %next, "Redirect");
                    chain.push(next.clone());
                    if !seen.insert(next.clone()) {
                        return Err(ResolveError::RedirectCycle { chain });
                    }
                    if chain.len() > self.max_redirects + 1 {
                        return Err(ResolveError::TooManyRedirects {
                            path: start,
                            limit: self.max_redirects,
                        });
                    }
                    current = next;
                }
            }
        }
    }

    /// Returns `Ok(None)` when nothing at this level matches.
    fn match_level_inner(
        &self,
        entries: &[RouteEntry],
        segments: &[String],
        offset: usize,
    ) -> Result<Option<LevelOutcome>, PathError> {
        let remaining = &segments[offset..];
        let ordered = entries
            .iter()
            .filter(|e| !e.is_default_redirect())
            .chain(entries.iter().filter(|e| e.is_default_redirect()));

        for entry in ordered {
            let Some(matched) = entry.pattern.match_segments(remaining) else {
                continue;
            };
            if entry.path_match == PathMatch::Full && matched.consumed != remaining.len() {
                continue;
            }
            let end = offset + matched.consumed;

            match &entry.target {
                RouteTarget::Redirect(to) => {
                    let next = redirect_target(to, &matched.params, &segments[..offset], &segments[end..])?;
                    return Ok(Some(LevelOutcome::Redirect(next)));
                }
                RouteTarget::View(source) => {
                    let this = RouteMatch {
                        route: entry.pattern.as_str().to_string(),
                        url: NavPath::from_segments(segments[..end].iter().cloned()),
                        params: matched.params,
                        source: source.clone(),
                    };
                    let rest_empty = end == segments.len();

                    if !entry.children.is_empty() {
                        match self.match_level_inner(&entry.children, segments, end)? {
                            Some(LevelOutcome::Matched(mut inner)) => {
                                inner.insert(0, this);
                                return Ok(Some(LevelOutcome::Matched(inner)));
                            }
                            Some(redirect @ LevelOutcome::Redirect(_)) => return Ok(Some(redirect)),
                            None if rest_empty => return Ok(Some(LevelOutcome::Matched(vec![this]))),
                            None => continue,
                        }
                    }

                    if rest_empty {
                        return Ok(Some(LevelOutcome::Matched(vec![this])));
                    }
                }
            }
        }

        Ok(None)
    }

    fn match_level(
        &self,
        entries: &[RouteEntry],
        segments: &[String],
        offset: usize,
    ) -> Result<LevelOutcome, ResolveError> {
        match self.match_level_inner(entries, segments, offset)? {
            Some(outcome) => Ok(outcome),
            None => Err(ResolveError::NoMatch {
                path: NavPath::from_segments(segments.iter().cloned()),
            }),
        }
    }
}

/// Build the path a redirect leads to.
///
/// Absolute targets (`/home`) replace the whole URL. Relative targets replace
/// the segments matched by the redirecting entry, keeping the parent prefix
/// and the unconsumed remainder. `:name` tokens are filled from the entry's
/// captures.
fn redirect_target(
    to: &str,
    params: &BTreeMap<String, String>,
    prefix: &[String],
    rest: &[String],
) -> Result<NavPath, PathError> {
    let substituted: Vec<String> = to
        .split('/')
        .map(|segment| match segment.strip_prefix(':') {
            Some(name) => params.get(name).cloned().unwrap_or_else(|| segment.to_string()),
            None => segment.to_string(),
        })
        .collect();
    let substituted = substituted.join("/");

    if to.starts_with('/') {
        return NavPath::parse(&substituted);
    }

    let base = NavPath::from_segments(prefix.iter().cloned());
    let target = base.join(&substituted)?;
    Ok(NavPath::from_segments(
        target.segments().iter().chain(rest).cloned(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteConfig;
    use crate::config::{defaults, LoaderConfig};
    use crate::views::builtin::register_builtin_views;
    use crate::views::ViewRegistry;

    fn registry() -> ViewRegistry {
        let mut registry = ViewRegistry::new();
        register_builtin_views(&mut registry, &LoaderConfig::default());
        registry
    }

    fn app_table() -> RouteTable {
        RouteTable::build(&defaults::app_routes(), &registry()).unwrap()
    }

    fn views(plan: &RoutePlan) -> Vec<&str> {
        plan.matches.iter().map(|m| m.source.name()).collect()
    }

    #[test]
    fn test_root_redirects_home() {
        let table = app_table();
        let plan = Resolver::new(&table, 16).resolve("/").unwrap();
        assert_eq!(plan.url.to_string(), "/home");
        assert_eq!(views(&plan), ["home"]);
        assert_eq!(plan.redirects.len(), 1);
    }

    #[test]
    fn test_notes_default_redirect() {
        let table = app_table();
        let resolver = Resolver::new(&table, 16);
        let bare = resolver.resolve("/notes").unwrap();
        let explicit = resolver.resolve("/notes/all").unwrap();

        assert_eq!(bare.url, explicit.url);
        assert_eq!(views(&bare), ["notes", "note-list"]);
        assert_eq!(views(&bare), views(&explicit));
        assert!(explicit.redirects.is_empty());
    }

    #[test]
    fn test_editor_params() {
        let table = app_table();
        let resolver = Resolver::new(&table, 16);

        let edit = resolver.resolve("/notes/edit/42").unwrap();
        assert_eq!(views(&edit), ["notes", "note-editor"]);
        assert_eq!(edit.leaf().unwrap().params.get("id").map(String::as_str), Some("42"));
        assert_eq!(edit.leaf().unwrap().route, "edit/:id");

        let new = resolver.resolve("/notes/new/7").unwrap();
        assert_eq!(views(&new), ["notes", "note-editor"]);
        assert_eq!(new.params().get("projectId").map(String::as_str), Some("7"));
        assert!(new.params().get("id").is_none());
    }

    #[test]
    fn test_match_urls_per_outlet() {
        let table = app_table();
        let plan = Resolver::new(&table, 16).resolve("/notes/draft/3").unwrap();
        assert_eq!(plan.matches[0].url.to_string(), "/notes");
        assert_eq!(plan.matches[1].url.to_string(), "/notes/draft/3");
    }

    #[test]
    fn test_no_match() {
        let table = app_table();
        let resolver = Resolver::new(&table, 16);
        assert!(matches!(
            resolver.resolve("/profile"),
            Err(ResolveError::NoMatch { .. })
        ));
        // Editor needs its parameter.
        assert!(matches!(
            resolver.resolve("/notes/edit"),
            Err(ResolveError::NoMatch { .. })
        ));
        assert!(matches!(
            resolver.resolve("/home/extra"),
            Err(ResolveError::NoMatch { .. })
        ));
    }

    #[test]
    fn test_deterministic() {
        let table = app_table();
        let resolver = Resolver::new(&table, 16);
        for path in ["/", "/notes", "/notes/edit/42", "/home"] {
            let a = resolver.resolve(path).unwrap();
            let b = resolver.resolve(path).unwrap();
            assert_eq!(a.url, b.url);
            assert_eq!(views(&a), views(&b));
            assert_eq!(a.params(), b.params());
        }
    }

    #[test]
    fn test_redirect_cycle() {
        let routes = vec![RouteConfig::redirect("a", "b"), RouteConfig::redirect("b", "a")];
        let table = RouteTable::build(&routes, &registry()).unwrap();
        let err = Resolver::new(&table, 16).resolve("/a").unwrap_err();
        match err {
            ResolveError::RedirectCycle { chain } => {
                let chain: Vec<String> = chain.iter().map(ToString::to_string).collect();
                assert_eq!(chain, ["/a", "/b", "/a"]);
            }
            other => panic!("expected cycle, got {other:?}"),
        }
    }

    #[test]
    fn test_redirect_limit() {
        let routes = vec![
            RouteConfig::redirect("a", "b"),
            RouteConfig::redirect("b", "c"),
            RouteConfig::redirect("c", "/home"),
            RouteConfig::component("home", "home"),
        ];
        let table = RouteTable::build(&routes, &registry()).unwrap();
        assert!(Resolver::new(&table, 3).resolve("/a").is_ok());
        assert!(matches!(
            Resolver::new(&table, 2).resolve("/a"),
            Err(ResolveError::TooManyRedirects { limit: 2, .. })
        ));
    }

    #[test]
    fn test_relative_redirect_keeps_prefix_rest_and_params() {
        let routes = vec![RouteConfig::lazy("notes", "notes").with_children(vec![
            RouteConfig::redirect("open/:id", "edit/:id"),
            RouteConfig::redirect("legacy", "all"),
            RouteConfig::lazy("all", "note-list"),
            RouteConfig::lazy("edit/:id", "note-editor"),
        ])];
        let table = RouteTable::build(&routes, &registry()).unwrap();
        let resolver = Resolver::new(&table, 16);

        let plan = resolver.resolve("/notes/open/9").unwrap();
        assert_eq!(plan.url.to_string(), "/notes/edit/9");
        assert_eq!(plan.params().get("id").map(String::as_str), Some("9"));

        let plan = resolver.resolve("/notes/legacy").unwrap();
        assert_eq!(plan.url.to_string(), "/notes/all");
    }

    #[test]
    fn test_declaration_order_wins() {
        let routes = vec![
            RouteConfig::lazy("", "notes")
                .with_children(vec![RouteConfig::lazy("home", "note-list")]),
            RouteConfig::component("home", "home"),
        ];
        let table = RouteTable::build(&routes, &registry()).unwrap();
        let plan = Resolver::new(&table, 16).resolve("/home").unwrap();
        assert_eq!(views(&plan), ["notes", "note-list"]);
    }

    #[test]
    fn test_default_redirect_tried_after_siblings() {
        let routes = vec![
            RouteConfig::redirect("", "home").full(),
            RouteConfig::lazy("", "note-list"),
            RouteConfig::component("home", "home"),
        ];
        let table = RouteTable::build(&routes, &registry()).unwrap();
        let resolver = Resolver::new(&table, 16);

        let plan = resolver.resolve("/").unwrap();
        assert!(plan.redirects.is_empty());
        assert_eq!(views(&plan), ["note-list"]);

        let plan = resolver.resolve("/home").unwrap();
        assert_eq!(views(&plan), ["home"]);
    }

    #[test]
    fn test_wildcard_matches_in_declared_position() {
        let routes = vec![
            RouteConfig::redirect("", "home").full(),
            RouteConfig::component("home", "home"),
            RouteConfig::redirect("**", "/home"),
            RouteConfig::lazy("notes", "notes"),
        ];
        let table = RouteTable::build(&routes, &registry()).unwrap();
        let resolver = Resolver::new(&table, 16);

        let plan = resolver.resolve("/home").unwrap();
        assert!(plan.redirects.is_empty());

        let plan = resolver.resolve("/").unwrap();
        assert_eq!(plan.url.to_string(), "/home");

        // `notes` is declared after the wildcard and never reached.
        let plan = resolver.resolve("/notes").unwrap();
        assert_eq!(plan.url.to_string(), "/home");
        assert_eq!(views(&plan), ["home"]);
    }

    #[test]
    fn test_backtracks_to_next_sibling() {
        let routes = vec![
            RouteConfig::lazy("notes", "notes")
                .with_children(vec![RouteConfig::lazy("all", "note-list")]),
            RouteConfig::lazy("notes/drafts", "draft"),
        ];
        let table = RouteTable::build(&routes, &registry()).unwrap();
        let plan = Resolver::new(&table, 16).resolve("/notes/drafts").unwrap();
        assert_eq!(views(&plan), ["draft"]);
    }

    #[test]
    fn test_parent_without_default_mounts_alone() {
        let routes = vec![RouteConfig::lazy("notes", "notes")
            .with_children(vec![RouteConfig::lazy("all", "note-list")])];
        let table = RouteTable::build(&routes, &registry()).unwrap();
        let plan = Resolver::new(&table, 16).resolve("/notes").unwrap();
        assert_eq!(views(&plan), ["notes"]);
    }
}
