//! Published shell state.
//!
//! A snapshot is immutable once built; the navigator swaps in a new one per
//! completed navigation and renderers read whichever is current.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::Arc;

use serde::Serialize;

use crate::icons::IconProvider;
use crate::navigation::render::render_menu;
use crate::navigation::RenderedItem;
use crate::routing::NavPath;
use crate::views::ViewDescriptor;

/// A view mounted in one outlet.
#[derive(Debug, Clone, Serialize)]
pub struct MountedView {
    /// Route path as declared.
    pub route: String,
    /// URL this outlet is mounted at.
    pub url: NavPath,
    pub view: Arc<ViewDescriptor>,
    pub params: BTreeMap<String, String>,
    /// The view's tab navigation, active state applied.
    pub tabs: Vec<RenderedItem>,
}

/// What the shell currently shows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShellSnapshot {
    /// Current URL; `None` before the first successful navigation.
    pub url: Option<NavPath>,
    /// Mounted views, outermost first.
    pub views: Vec<MountedView>,
    /// Side navigation.
    pub menu: Vec<RenderedItem>,
}

impl ShellSnapshot {
    pub fn leaf(&self) -> Option<&MountedView> {
        self.views.last()
    }

    /// Name of the innermost mounted view.
    pub fn leaf_name(&self) -> Option<&str> {
        self.leaf().map(|v| v.view.name.as_str())
    }

    /// All parameters of the mounted chain; inner views win on clashes.
    pub fn params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        for view in &self.views {
            params.extend(view.params.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        params
    }

    /// Plain-text rendering: side navigation, then the outlet chain with tabs.
    pub fn render_text(&self, icons: &dyn IconProvider) -> String {
        let mut out = String::new();
        out.push_str(&render_menu(&self.menu, icons));
        out.push('\n');

        match &self.url {
            Some(url) => {
                let _ = writeln!(out, "@ {}", url);
            }
            None => out.push_str("@ (nothing mounted)\n"),
        }

        for (depth, view) in self.views.iter().enumerate() {
            let indent = "  ".repeat(depth);
            let _ = write!(out, "{}[{}] {}", indent, view.view.name, view.view.title);
            if !view.params.is_empty() {
                let params: Vec<String> =
                    view.params.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
                let _ = write!(out, " {{{}}}", params.join(", "));
            }
            out.push('\n');
            if !view.tabs.is_empty() {
                for line in render_menu(&view.tabs, icons).lines() {
                    let _ = writeln!(out, "{}  | {}", indent, line);
                }
            }
        }

        out
    }
}
