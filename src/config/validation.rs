//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Route entries: exactly one resolution mode, redirects without children,
//!   unique sibling paths, parsable path patterns
//! - Navigation links: every link should resolve to a route
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Structural checks are pure: ShellConfig → Result<(), Vec<ValidationError>>
//! - Link checks need the compiled table and run at startup

use std::collections::HashSet;

use crate::config::schema::{RouteConfig, ShellConfig};
use crate::navigation::NavigationModel;
use crate::routing::matcher::{PathPattern, PatternError};
use crate::routing::resolver::{ResolveError, Resolver};
use crate::routing::table::RouteTable;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("route `{route}` sets {found} resolution modes; expected exactly one of component, load_component, redirect_to")]
    ResolutionMode { route: String, found: usize },

    #[error("route `{route}` redirects and cannot declare children")]
    RedirectWithChildren { route: String },

    #[error("route path `{path}` is declared more than once under `{parent}`")]
    DuplicatePath { parent: String, path: String },

    #[error("route `{route}`: {source}")]
    Pattern {
        route: String,
        #[source]
        source: PatternError,
    },

    #[error("router.max_redirects must be greater than zero")]
    ZeroRedirectLimit,

    #[error("navigation item `{label}` links to `{link}`, which matches no route")]
    DanglingLink { label: String, link: String },

    #[error("navigation item `{label}` links to `{link}`: {source}")]
    BrokenLink {
        label: String,
        link: String,
        #[source]
        source: ResolveError,
    },
}

impl ValidationError {
    /// Dangling links are tolerated unless `router.strict_links` is set.
    pub fn is_dangling_link(&self) -> bool {
        matches!(self, ValidationError::DanglingLink { .. })
    }
}

/// Join errors into one line for display.
pub fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Structural validation of a loaded configuration.
pub fn validate_config(config: &ShellConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.router.max_redirects == 0 {
        errors.push(ValidationError::ZeroRedirectLimit);
    }
    validate_routes(&config.routes, "/", &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_routes(routes: &[RouteConfig], parent: &str, errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();

    for route in routes {
        let full = format!("{}{}", parent, route.path);

        if !seen.insert(route.path.trim_matches('/')) {
            errors.push(ValidationError::DuplicatePath {
                parent: parent.to_string(),
                path: route.path.clone(),
            });
        }

        if let Err(source) = PathPattern::parse(&route.path) {
            errors.push(ValidationError::Pattern {
                route: full.clone(),
                source,
            });
        }

        let found = route.mode_count();
        if found != 1 {
            errors.push(ValidationError::ResolutionMode {
                route: full.clone(),
                found,
            });
        }

        if route.redirect_to.is_some() && !route.children.is_empty() {
            errors.push(ValidationError::RedirectWithChildren {
                route: full.clone(),
            });
        }

        let parent = format!("{}/", full.trim_end_matches('/'));
        validate_routes(&route.children, &parent, errors);
    }
}

/// Resolve every link of `model` against `table`.
///
/// Links that match no route become `DanglingLink`; any other resolution
/// failure (redirect cycle, redirect overflow) becomes `BrokenLink`.
pub fn validate_links(
    model: &NavigationModel,
    table: &RouteTable,
    max_redirects: usize,
) -> Vec<ValidationError> {
    let resolver = Resolver::new(table, max_redirects);
    let mut errors = Vec::new();

    for (item, target) in model.items().iter().zip(model.targets()) {
        let (Some(link), Some(target)) = (item.router_link(), target) else {
            continue;
        };
        let label = item.label().to_string();
        let link = link.to_string();
        match resolver.resolve_path(target.clone()) {
            Ok(_) => {}
            Err(ResolveError::NoMatch { .. }) => {
                errors.push(ValidationError::DanglingLink { label, link });
            }
            Err(source) => {
                errors.push(ValidationError::BrokenLink { label, link, source });
            }
        }
    }

    errors
}
