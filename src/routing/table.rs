//! Compiled route table.
//!
//! # Responsibilities
//! - Compile `RouteConfig` trees into `RouteEntry` trees at startup
//! - Bind `component` / `load_component` names to registered views
//! - Keep siblings in declaration order
//!
//! # Design Decisions
//! - Immutable after construction, shared via `Arc`
//! - Declaration order is match order; the resolver only defers default
//!   redirects (empty path, full match) behind their siblings
//! - Unknown view names are a startup error, not a navigation-time one

use std::fmt::{self, Write};

use crate::config::schema::{PathMatch, RouteConfig};
use crate::routing::matcher::{PathPattern, PatternError};
use crate::views::{ViewRegistry, ViewSource};

/// Error while compiling the route table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("route `{route}`: {source}")]
    Pattern {
        route: String,
        #[source]
        source: PatternError,
    },
    #[error("route `{route}` references unknown view `{view}`")]
    UnknownView { route: String, view: String },
    #[error("route `{route}`: view `{view}` is a deferred module; reference it with load_component")]
    DeferredComponent { route: String, view: String },
    #[error("route `{route}` must set exactly one of component, load_component, redirect_to")]
    Mode { route: String },
}

/// What a matched entry does.
#[derive(Debug, Clone)]
pub enum RouteTarget {
    Redirect(String),
    View(ViewSource),
}

/// One node of the route tree.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub pattern: PathPattern,
    pub path_match: PathMatch,
    pub target: RouteTarget,
    pub children: Vec<RouteEntry>,
}

impl RouteEntry {
    /// `path = ""`, full match, redirect: the default of its level.
    pub fn is_default_redirect(&self) -> bool {
        self.pattern.is_empty()
            && self.path_match == PathMatch::Full
            && matches!(self.target, RouteTarget::Redirect(_))
    }
}

/// The routing table: ordered top-level entries.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    roots: Vec<RouteEntry>,
}

impl RouteTable {
    /// Compile `routes` against the views in `registry`.
    pub fn build(routes: &[RouteConfig], registry: &ViewRegistry) -> Result<Self, TableError> {
        let roots = compile_level(routes, registry, "")?;
        Ok(Self { roots })
    }

    pub fn roots(&self) -> &[RouteEntry] {
        &self.roots
    }

    /// Indented listing of the tree, one entry per line.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        describe_level(&self.roots, 0, &mut out);
        out
    }
}

fn compile_level(
    routes: &[RouteConfig],
    registry: &ViewRegistry,
    parent: &str,
) -> Result<Vec<RouteEntry>, TableError> {
    let mut entries = Vec::with_capacity(routes.len());

    for config in routes {
        let route = if parent.is_empty() {
            format!("/{}", config.path)
        } else {
            format!("{}/{}", parent.trim_end_matches('/'), config.path)
        };

        let pattern = PathPattern::parse(&config.path).map_err(|source| TableError::Pattern {
            route: route.clone(),
            source,
        })?;

        let target = match (&config.redirect_to, &config.component, &config.load_component) {
            (Some(to), None, None) => RouteTarget::Redirect(to.clone()),
            (None, Some(view), None) => {
                let source = match registry.component(view) {
                    Some(source) => source,
                    None if registry.get(view).is_some() => {
                        return Err(TableError::DeferredComponent {
                            route,
                            view: view.clone(),
                        })
                    }
                    None => {
                        return Err(TableError::UnknownView {
                            route,
                            view: view.clone(),
                        })
                    }
                };
                RouteTarget::View(source)
            }
            (None, None, Some(view)) => {
                let source = registry
                    .load_component(view)
                    .ok_or_else(|| TableError::UnknownView {
                        route: route.clone(),
                        view: view.clone(),
                    })?;
                RouteTarget::View(source)
            }
            _ => return Err(TableError::Mode { route }),
        };

        let children = compile_level(&config.children, registry, &route)?;
        entries.push(RouteEntry {
            pattern,
            path_match: config.path_match,
            target,
            children,
        });
    }

    Ok(entries)
}

fn describe_level(entries: &[RouteEntry], depth: usize, out: &mut String) {
    for entry in entries {
        let path = if entry.pattern.is_empty() {
            "''"
        } else {
            entry.pattern.as_str()
        };
        let _ = write!(out, "{:indent$}{}", "", path, indent = depth * 2);
        if entry.path_match == PathMatch::Full {
            out.push_str(" (full)");
        }
        let _ = match &entry.target {
            RouteTarget::Redirect(to) => writeln!(out, " -> redirect {}", to),
            RouteTarget::View(source) if source.is_deferred() => {
                writeln!(out, " -> {} (deferred)", source.name())
            }
            RouteTarget::View(source) => writeln!(out, " -> {}", source.name()),
        };
        describe_level(&entry.children, depth + 1, out);
    }
}

impl fmt::Display for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults;
    use crate::config::LoaderConfig;
    use crate::views::builtin::register_builtin_views;

    fn registry() -> ViewRegistry {
        let mut registry = ViewRegistry::new();
        register_builtin_views(&mut registry, &LoaderConfig::default());
        registry
    }

    #[test]
    fn test_build_app_routes() {
        let table = RouteTable::build(&defaults::app_routes(), &registry()).unwrap();
        let roots: Vec<&str> = table.roots().iter().map(|e| e.pattern.as_str()).collect();
        assert_eq!(roots, ["", "home", "notes"]);
        assert!(table.roots()[0].is_default_redirect());
        assert!(!table.roots()[1].is_default_redirect());

        let notes = &table.roots()[2];
        let children: Vec<&str> = notes.children.iter().map(|e| e.pattern.as_str()).collect();
        assert_eq!(children, ["", "all", "new/:projectId", "edit/:id", "draft/:projectId"]);
    }

    #[test]
    fn test_unknown_view() {
        let routes = vec![RouteConfig::component("about", "about")];
        assert_eq!(
            RouteTable::build(&routes, &registry()).unwrap_err(),
            TableError::UnknownView {
                route: "/about".into(),
                view: "about".into()
            }
        );
    }

    #[test]
    fn test_component_must_be_eager() {
        let routes = vec![RouteConfig::component("drafts", "draft")];
        assert!(matches!(
            RouteTable::build(&routes, &registry()),
            Err(TableError::DeferredComponent { .. })
        ));
    }

    #[test]
    fn test_bad_pattern_reports_route() {
        let routes = vec![RouteConfig::lazy("notes", "notes")
            .with_children(vec![RouteConfig::lazy("edit/:", "note-editor")])];
        let err = RouteTable::build(&routes, &registry()).unwrap_err();
        assert!(matches!(err, TableError::Pattern { ref route, .. } if route == "/notes/edit/:"));
    }

    #[test]
    fn test_describe() {
        let table = RouteTable::build(&defaults::app_routes(), &registry()).unwrap();
        let text = table.describe();
        assert!(text.contains("home -> home\n"));
        assert!(text.contains("notes -> notes (deferred)\n"));
        assert!(text.contains("  edit/:id -> note-editor (deferred)\n"));
        assert!(text.contains("'' (full) -> redirect home\n"));
    }
}
