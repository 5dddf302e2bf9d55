//! Application shell: side navigation plus a lazily loaded route tree.
//!
//! # Architecture Overview
//!
//! ```text
//!   ShellConfig ──▶ lifecycle::startup ──▶ Shell
//!                                            │
//!   navigate(path)                           ▼
//!   ───────────────▶ host::Navigator ──▶ routing::Resolver (match, redirect)
//!                          │
//!                          ├──▶ views::ModuleCache (deferred loads)
//!                          ├──▶ navigation::NavigationModel (active flags)
//!                          ▼
//!                    ShellSnapshot ──▶ render (icons::IconProvider)
//! ```

// Core subsystems
pub mod config;
pub mod navigation;
pub mod routing;
pub mod views;

// Host
pub mod host;
pub mod icons;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ShellConfig;
pub use host::{NavigationOutcome, Shell, ShellSnapshot};
pub use lifecycle::{start, Shutdown};
