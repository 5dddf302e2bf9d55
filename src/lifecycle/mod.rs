//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validate config → Register views → Compile routes → Check links → Shell
//!
//! Shutdown (shutdown.rs):
//!     Trigger → every ShutdownSignal resolves → session loop exits
//!
//! Signals (signals.rs):
//!     Ctrl-C → Trigger shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then views, then routes, then links
//! - In-flight navigations are dropped on shutdown; nothing needs draining

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{Shutdown, ShutdownSignal};
pub use startup::{start, ShellBuilder, StartupError};
