//! Navigation model subsystem.
//!
//! # Data Flow
//! ```text
//! NavItemConfig[] (startup)
//!     → item.rs (typed NavigationItem, malformed badges dropped)
//!     → model.rs (links resolved against the base path)
//!
//! Active path notification (routing host):
//!     → model.set_active(path)
//!     → model.render(): glyph.rs + badge rules
//!     → render.rs (text menu via IconProvider)
//! ```
//!
//! # Design Decisions
//! - Icon fallback is an explicit lookup table, never free-form matching
//! - The `"active"` badge and the active flag are separate signals

pub mod glyph;
pub mod item;
pub mod model;
pub mod render;

pub use glyph::{resolve_glyph, BuiltinGlyph, Glyph};
pub use item::{Badge, IconRef, NavigationItem};
pub use model::{resolve_badge, BadgeKind, NavigationModel, RenderedBadge, RenderedItem};
