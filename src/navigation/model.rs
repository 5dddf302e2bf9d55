//! Navigation model: descriptors in, render-ready entries out.
//!
//! # Responsibilities
//! - Own the ordered item list (side navigation or a view's tabs)
//! - Resolve each item's link once, against the model's base path
//! - Apply active-path notifications from the routing host
//! - Produce `(is_active, glyph, badge_kind, badge_value)` per item
//!
//! # Design Decisions
//! - The model never changes `active` on its own; only `set_active` writes it
//! - Active matching is a segment prefix match, so `/notes` stays lit on `/notes/all`
//! - Malformed data degrades: an unparsable link disables the click target

use serde::Serialize;

use crate::navigation::glyph::{resolve_glyph, Glyph};
use crate::navigation::item::{Badge, NavigationItem};
use crate::routing::path::NavPath;

/// Visual style of a rendered badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKind {
    /// Outline + accent color, used for the `"active"` sentinel.
    Status,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedBadge {
    pub kind: BadgeKind,
    pub value: String,
}

/// Decide whether and how to show the badge of `item`.
///
/// Independent of the item's `active` flag.
pub fn resolve_badge(item: &NavigationItem) -> Option<RenderedBadge> {
    match item.badge()? {
        Badge::Status => Some(RenderedBadge {
            kind: BadgeKind::Status,
            value: crate::navigation::item::STATUS_BADGE.to_string(),
        }),
        Badge::Count(0) => None,
        Badge::Count(n) => Some(RenderedBadge {
            kind: BadgeKind::Default,
            value: n.to_string(),
        }),
        Badge::Text(text) if text.is_empty() => None,
        Badge::Text(text) => Some(RenderedBadge {
            kind: BadgeKind::Default,
            value: text.clone(),
        }),
    }
}

/// One entry as handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedItem {
    pub label: String,
    pub is_active: bool,
    pub glyph: Option<Glyph>,
    pub badge: Option<RenderedBadge>,
    /// Click target; `None` disables the entry.
    pub target: Option<NavPath>,
}

/// Ordered navigation items plus their resolved targets.
#[derive(Debug, Clone)]
pub struct NavigationModel {
    items: Vec<NavigationItem>,
    targets: Vec<Option<NavPath>>,
}

impl NavigationModel {
    /// Model whose relative links resolve against the root.
    pub fn new(items: Vec<NavigationItem>) -> Self {
        Self::with_base(items, &NavPath::root())
    }

    /// Model whose relative links resolve against `base`, as tab links do
    /// against the URL their container view is mounted at.
    pub fn with_base(items: Vec<NavigationItem>, base: &NavPath) -> Self {
        let targets = items
            .iter()
            .map(|item| {
                let link = item.router_link()?;
                match base.join(link) {
                    Ok(target) => Some(target),
                    Err(e) => {
                        tracing::debug!(label = %item.label(), error = %e, "Navigation link disabled");
                        None
                    }
                }
            })
            .collect();
        Self { items, targets }
    }

    pub fn items(&self) -> &[NavigationItem] {
        &self.items
    }

    pub fn targets(&self) -> &[Option<NavPath>] {
        &self.targets
    }

    /// Mark every item whose target is a prefix of `path` active, all others
    /// inactive. Returns whether any flag changed.
    pub fn set_active(&mut self, path: &NavPath) -> bool {
        let mut changed = false;
        for (item, target) in self.items.iter_mut().zip(&self.targets) {
            let active = target.as_ref().is_some_and(|t| path.starts_with(t));
            if item.active != active {
                item.active = active;
                changed = true;
            }
        }
        changed
    }

    pub fn render(&self) -> Vec<RenderedItem> {
        self.items
            .iter()
            .zip(&self.targets)
            .map(|(item, target)| RenderedItem {
                label: item.label().to_string(),
                is_active: item.is_active(),
                glyph: resolve_glyph(item),
                badge: resolve_badge(item),
                target: target.clone(),
            })
            .collect()
    }
}
