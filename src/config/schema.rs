//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the shell.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Root configuration for the application shell.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Router behaviour (redirect limit, link checking).
    pub router: RouterConfig,

    /// Deferred view module loading.
    pub loader: LoaderConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Side navigation entries, in display order.
    pub navigation: Vec<NavItemConfig>,

    /// Top-level route entries, in declaration order.
    pub routes: Vec<RouteConfig>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            router: RouterConfig::default(),
            loader: LoaderConfig::default(),
            observability: ObservabilityConfig::default(),
            navigation: defaults::navigation(),
            routes: defaults::app_routes(),
        }
    }
}

/// Router configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Maximum number of redirect hops followed in one navigation.
    pub max_redirects: usize,

    /// Fail startup when a navigation link resolves to no route.
    pub strict_links: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            max_redirects: 16,
            strict_links: false,
        }
    }
}

/// Deferred view module configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Artificial delay for the built-in deferred modules, in milliseconds.
    pub simulated_latency_ms: u64,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Record navigation metrics into an in-process Prometheus recorder.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
        }
    }
}

/// A navigation item as written in configuration.
///
/// `badge` stays loosely typed here: an unrecognized shape is dropped when the
/// item is built instead of rejecting the whole file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NavItemConfig {
    #[serde(default)]
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<toml::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub router_link: Option<String>,

    #[serde(default)]
    pub active: bool,
}

impl NavItemConfig {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn icon(mut self, pack: &str, glyph: &str) -> Self {
        self.icon = Some(IconConfig::Pair([pack.to_string(), glyph.to_string()]));
        self
    }

    pub fn badge(mut self, badge: impl Into<toml::Value>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.router_link = Some(link.into());
        self
    }
}

/// Explicit icon reference: `["far", "user"]` or `{ pack = "far", glyph = "user" }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum IconConfig {
    Pair([String; 2]),
    Named { pack: String, glyph: String },
}

impl IconConfig {
    pub fn pack(&self) -> &str {
        match self {
            IconConfig::Pair([pack, _]) => pack,
            IconConfig::Named { pack, .. } => pack,
        }
    }

    pub fn glyph(&self) -> &str {
        match self {
            IconConfig::Pair([_, glyph]) => glyph,
            IconConfig::Named { glyph, .. } => glyph,
        }
    }
}

/// How a route path is compared against the remaining URL segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathMatch {
    /// The path must be a segment prefix of the remainder.
    #[default]
    Prefix,
    /// The path must consume the whole remainder.
    Full,
}

/// A route entry as written in configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Path pattern relative to the parent entry (`""`, `"all"`, `"edit/:id"`, `"**"`).
    #[serde(default)]
    pub path: String,

    #[serde(default)]
    pub path_match: PathMatch,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,

    /// Name of an eagerly registered view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,

    /// Name of a view module loaded on first visit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_component: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteConfig>,
}

impl RouteConfig {
    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            redirect_to: Some(to.into()),
            ..Self::default()
        }
    }

    pub fn component(path: impl Into<String>, view: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            component: Some(view.into()),
            ..Self::default()
        }
    }

    pub fn lazy(path: impl Into<String>, view: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            load_component: Some(view.into()),
            ..Self::default()
        }
    }

    pub fn full(mut self) -> Self {
        self.path_match = PathMatch::Full;
        self
    }

    pub fn with_children(mut self, children: Vec<RouteConfig>) -> Self {
        self.children = children;
        self
    }

    /// Number of resolution modes set on this entry.
    pub fn mode_count(&self) -> usize {
        [
            self.redirect_to.is_some(),
            self.component.is_some(),
            self.load_component.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}
