//! In-memory icon library.

use std::collections::HashMap;

use crate::icons::IconProvider;
use crate::navigation::{BuiltinGlyph, Glyph};

/// Icon packs keyed by pack id, then glyph id.
#[derive(Debug, Default, Clone)]
pub struct IconLibrary {
    packs: HashMap<String, HashMap<String, String>>,
    builtins: HashMap<BuiltinGlyph, String>,
}

impl IconLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Library with the solid (`fas`) and regular (`far`) packs the shell uses,
    /// plus the built-in label glyphs.
    pub fn standard() -> Self {
        let mut library = Self::new();
        library.add_pack(
            "fas",
            [
                ("search", "🔍"),
                ("chart-line", "📈"),
                ("arrow-alt-circle-up", "⬆"),
                ("folder", "📂"),
                ("user", "👤"),
            ],
        );
        library.add_pack(
            "far",
            [
                ("user", "👤"),
                ("bell", "🔔"),
                ("message", "💬"),
                ("folder", "📁"),
                ("file-alt", "📄"),
                ("file", "🗋"),
            ],
        );
        library.add_builtin(BuiltinGlyph::Home, "⌂");
        library.add_builtin(BuiltinGlyph::Settings, "⚙");
        library.add_builtin(BuiltinGlyph::Task, "☑");
        library.add_builtin(BuiltinGlyph::Logout, "⎋");
        library
    }

    /// Register (or extend) a pack.
    pub fn add_pack<I, G, S>(&mut self, pack: &str, glyphs: I)
    where
        I: IntoIterator<Item = (G, S)>,
        G: Into<String>,
        S: Into<String>,
    {
        let entry = self.packs.entry(pack.to_string()).or_default();
        for (glyph, symbol) in glyphs {
            entry.insert(glyph.into(), symbol.into());
        }
    }

    pub fn add_builtin(&mut self, glyph: BuiltinGlyph, symbol: impl Into<String>) {
        self.builtins.insert(glyph, symbol.into());
    }

    pub fn pack_count(&self) -> usize {
        self.packs.len()
    }
}

impl IconProvider for IconLibrary {
    fn symbol(&self, glyph: &Glyph) -> Option<&str> {
        match glyph {
            Glyph::Icon(icon) => self
                .packs
                .get(&icon.pack)
                .and_then(|pack| pack.get(&icon.glyph))
                .map(String::as_str),
            Glyph::Builtin { glyph } => self.builtins.get(glyph).map(String::as_str),
        }
    }
}
