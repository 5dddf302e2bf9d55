//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ShellConfig (validated, immutable)
//!     → lifecycle::startup builds the navigation model and route table
//!
//! No file:
//!     ShellConfig::default() → defaults.rs (built-in navigation + routes)
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; navigation and routes never change afterwards
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    IconConfig, LoaderConfig, NavItemConfig, ObservabilityConfig, PathMatch, RouteConfig,
    RouterConfig, ShellConfig,
};
pub use validation::ValidationError;
