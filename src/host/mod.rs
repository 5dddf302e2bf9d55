//! Shell host.
//!
//! # Data Flow
//! ```text
//! navigate(path)
//!     → navigator.rs (resolve → load deferred views → commit)
//!     → snapshot.rs (immutable ShellSnapshot, swapped in atomically)
//!     → renderers read `Shell::snapshot()`
//! ```
//!
//! # Design Decisions
//! - `Shell` is cheap to clone; clones share the navigator
//! - Concurrent navigations are allowed; the latest one wins

pub mod navigator;
pub mod snapshot;

use std::sync::Arc;

use crate::icons::IconProvider;
use crate::routing::RouteTable;

pub use navigator::{NavigationError, NavigationOutcome, Navigator};
pub use snapshot::{MountedView, ShellSnapshot};

/// The running application shell.
#[derive(Clone)]
pub struct Shell {
    navigator: Arc<Navigator>,
    icons: Arc<dyn IconProvider>,
}

impl Shell {
    pub fn new(navigator: Navigator, icons: Arc<dyn IconProvider>) -> Self {
        Self {
            navigator: Arc::new(navigator),
            icons,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn icons(&self) -> &dyn IconProvider {
        self.icons.as_ref()
    }

    pub fn routes(&self) -> &RouteTable {
        self.navigator.table()
    }

    pub async fn navigate(&self, path: &str) -> NavigationOutcome {
        self.navigator.navigate(path).await
    }

    pub fn snapshot(&self) -> Arc<ShellSnapshot> {
        self.navigator.current()
    }

    /// Text rendering of the current snapshot.
    pub fn render_text(&self) -> String {
        self.snapshot().render_text(self.icons())
    }
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("url", &self.snapshot().url)
            .field("icons", &self.icons)
            .finish()
    }
}
