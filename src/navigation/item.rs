//! Navigation item descriptors.

use serde::Serialize;

use crate::config::schema::NavItemConfig;

/// Badge text reserved for the status badge style.
pub const STATUS_BADGE: &str = "active";

/// An explicit `(pack, glyph)` icon reference, forwarded to the icon provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IconRef {
    pub pack: String,
    pub glyph: String,
}

impl IconRef {
    pub fn new(pack: impl Into<String>, glyph: impl Into<String>) -> Self {
        Self {
            pack: pack.into(),
            glyph: glyph.into(),
        }
    }
}

/// Badge attached to a navigation item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Badge {
    /// The `"active"` sentinel.
    Status,
    Count(i64),
    Text(String),
}

impl Badge {
    /// Interpret a configured badge value.
    ///
    /// Returns `None` for shapes that cannot be shown (tables, arrays, ...).
    pub fn from_value(value: &toml::Value) -> Option<Self> {
        match value {
            toml::Value::String(s) if s == STATUS_BADGE => Some(Badge::Status),
            toml::Value::String(s) => Some(Badge::Text(s.clone())),
            toml::Value::Integer(n) => Some(Badge::Count(*n)),
            _ => None,
        }
    }
}

/// A side navigation or tab entry.
///
/// Immutable after construction except for the `active` flag, which only
/// [`NavigationModel::set_active`](super::NavigationModel::set_active) writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationItem {
    label: String,
    icon: Option<IconRef>,
    badge: Option<Badge>,
    router_link: Option<String>,
    pub(crate) active: bool,
}

impl NavigationItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            badge: None,
            router_link: None,
            active: false,
        }
    }

    pub fn with_icon(mut self, pack: &str, glyph: &str) -> Self {
        self.icon = Some(IconRef::new(pack, glyph));
        self
    }

    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.router_link = Some(link.into());
        self
    }

    pub fn from_config(config: &NavItemConfig) -> Self {
        let badge = config.badge.as_ref().and_then(|value| {
            let badge = Badge::from_value(value);
            if badge.is_none() {
                tracing::debug!(label = %config.label, badge = %value, "Ignoring badge with unsupported shape");
            }
            badge
        });

        Self {
            label: config.label.clone(),
            icon: config
                .icon
                .as_ref()
                .map(|icon| IconRef::new(icon.pack(), icon.glyph())),
            badge,
            router_link: config.router_link.clone(),
            active: config.active,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn icon(&self) -> Option<&IconRef> {
        self.icon.as_ref()
    }

    pub fn badge(&self) -> Option<&Badge> {
        self.badge.as_ref()
    }

    pub fn router_link(&self) -> Option<&str> {
        self.router_link.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
