//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming navigation (raw path)
//!     → path.rs (normalize into segments)
//!     → resolver.rs (walk the table level by level)
//!         → matcher.rs (segment patterns, parameter capture)
//!         → redirect? substitute and restart (cycle check)
//!     → Return: RoutePlan (outlet chain) or ResolveError
//!
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → table.rs (bind view names, keep declaration order)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in the hot path (segment comparison only)
//! - Deterministic: same input always produces the same plan
//! - Explicit NoMatch rather than a silent fallback view

pub mod matcher;
pub mod path;
pub mod resolver;
pub mod table;

pub use path::{NavPath, PathError};
pub use resolver::{ResolveError, Resolver, RouteMatch, RoutePlan};
pub use table::{RouteEntry, RouteTable, RouteTarget, TableError};
