//! Icon provider subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     IconLibrary::standard()  (packs + built-in glyphs, registered once)
//!     → Arc<dyn IconProvider> shared by every renderer
//!
//! Render:
//!     Glyph (explicit icon or built-in)
//!     → provider.symbol(glyph)
//!     → Some(symbol) or None (unknown pair renders nothing)
//! ```
//!
//! # Design Decisions
//! - Single process-wide provider; views never register packs themselves
//! - Unknown pack/glyph pairs are not errors

pub mod library;

use crate::navigation::Glyph;

pub use library::IconLibrary;

/// Resolves glyph references to something a renderer can draw.
pub trait IconProvider: Send + Sync + std::fmt::Debug {
    /// Returns the symbol for `glyph`, or `None` when it is unknown.
    fn symbol(&self, glyph: &Glyph) -> Option<&str>;
}
