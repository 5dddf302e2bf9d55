//! Glyph selection for navigation items.
//!
//! Fallback chain, evaluated in this order:
//! 1. explicit icon on the item
//! 2. built-in glyph for a special label (case-insensitive)
//! 3. no glyph, label text only

use serde::Serialize;

use crate::navigation::item::{IconRef, NavigationItem};

/// Glyphs shipped with the shell for well-known labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinGlyph {
    Home,
    Settings,
    Task,
    Logout,
}

/// Label → glyph lookup table.
pub const LABEL_GLYPHS: [(&str, BuiltinGlyph); 4] = [
    ("home", BuiltinGlyph::Home),
    ("settings", BuiltinGlyph::Settings),
    ("task", BuiltinGlyph::Task),
    ("logout", BuiltinGlyph::Logout),
];

impl BuiltinGlyph {
    pub fn for_label(label: &str) -> Option<Self> {
        LABEL_GLYPHS
            .iter()
            .find(|(key, _)| label.eq_ignore_ascii_case(key))
            .map(|(_, glyph)| *glyph)
    }

    pub fn name(&self) -> &'static str {
        match self {
            BuiltinGlyph::Home => "home",
            BuiltinGlyph::Settings => "settings",
            BuiltinGlyph::Task => "task",
            BuiltinGlyph::Logout => "logout",
        }
    }
}

/// The glyph chosen for an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Glyph {
    Icon(IconRef),
    Builtin { glyph: BuiltinGlyph },
}

/// Pick the glyph for `item`, or `None` when only the label is shown.
pub fn resolve_glyph(item: &NavigationItem) -> Option<Glyph> {
    if let Some(icon) = item.icon() {
        return Some(Glyph::Icon(icon.clone()));
    }
    BuiltinGlyph::for_label(item.label()).map(|glyph| Glyph::Builtin { glyph })
}
