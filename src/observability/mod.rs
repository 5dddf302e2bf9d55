//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events, one span per navigation)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stderr log output
//!     → Prometheus text printed by the CLI (`--metrics`)
//! ```
//!
//! # Design Decisions
//! - Every navigation carries a UUID so its log lines can be correlated
//! - Metrics are cheap (atomic increments) and optional

pub mod logging;
pub mod metrics;
