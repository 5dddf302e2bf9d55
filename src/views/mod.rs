//! View registry and deferred view modules.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     builtin.rs registers views by name
//!         - eager:    ViewDescriptor available immediately
//!         - deferred: ViewModule factory, loaded on first visit
//!     routing table looks up `component` / `load_component` names here
//!
//! Navigation:
//!     ViewSource (from the matched route)
//!     → cache.rs (ModuleCache: return cached descriptor or await the factory)
//!     → Arc<ViewDescriptor> mounted by the host
//! ```
//!
//! # Design Decisions
//! - A deferred load is an ordinary future; awaiting it is the only
//!   suspension point of a navigation
//! - Successful loads are cached for the life of the process, failures are not

pub mod builtin;
pub mod cache;
pub mod registry;

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde::Serialize;

use crate::navigation::NavigationItem;

pub use cache::ModuleCache;
pub use registry::{Registration, ViewRegistry};

/// A mountable view, as produced by an eager registration or a loaded module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewDescriptor {
    /// Registry name (`"home"`, `"note-editor"`, ...).
    pub name: String,
    pub title: String,
    /// Secondary navigation shown by this view around its outlet.
    #[serde(skip)]
    pub tabs: Vec<NavigationItem>,
}

impl ViewDescriptor {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            tabs: Vec::new(),
        }
    }

    pub fn with_tabs(mut self, tabs: Vec<NavigationItem>) -> Self {
        self.tabs = tabs;
        self
    }
}

/// Error from a deferred view module.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("view module `{module}` failed to load: {reason}")]
pub struct LoadError {
    pub module: String,
    pub reason: String,
}

impl LoadError {
    pub fn new(module: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            reason: reason.into(),
        }
    }
}

pub type LoadFuture = BoxFuture<'static, Result<Arc<ViewDescriptor>, LoadError>>;

/// Factory for a deferred view.
pub trait ViewModule: Send + Sync {
    fn load(&self) -> LoadFuture;
}

impl<F, Fut> ViewModule for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<Arc<ViewDescriptor>, LoadError>> + Send + 'static,
{
    fn load(&self) -> LoadFuture {
        (self)().boxed()
    }
}

/// A reference to a deferred view module.
#[derive(Clone)]
pub struct DeferredView {
    pub name: String,
    pub module: Arc<dyn ViewModule>,
}

impl fmt::Debug for DeferredView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredView").field("name", &self.name).finish_non_exhaustive()
    }
}

/// How a route obtains its view.
#[derive(Debug, Clone)]
pub enum ViewSource {
    Ready(Arc<ViewDescriptor>),
    Deferred(DeferredView),
}

impl ViewSource {
    pub fn name(&self) -> &str {
        match self {
            ViewSource::Ready(view) => &view.name,
            ViewSource::Deferred(deferred) => &deferred.name,
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, ViewSource::Deferred(_))
    }
}
