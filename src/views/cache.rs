//! Loaded module cache.
//!
//! # Responsibilities
//! - Return eager views immediately
//! - Await deferred factories on first use, then serve the cached descriptor
//! - Leave failed loads uncached so the next navigation retries

use std::sync::Arc;

use dashmap::DashMap;

use crate::observability::metrics;
use crate::views::{LoadError, ViewDescriptor, ViewSource};

#[derive(Debug, Default, Clone)]
pub struct ModuleCache {
    loaded: Arc<DashMap<String, Arc<ViewDescriptor>>>,
}

impl ModuleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Obtain the view for `source`, loading it if needed.
    ///
    /// Dropping the returned future abandons the load without caching anything.
    pub async fn load(&self, source: &ViewSource) -> Result<Arc<ViewDescriptor>, LoadError> {
        let deferred = match source {
            ViewSource::Ready(view) => return Ok(view.clone()),
            ViewSource::Deferred(deferred) => deferred,
        };

        if let Some(view) = self.loaded.get(&deferred.name) {
            metrics::record_module_load(&deferred.name, "cached");
            return Ok(view.value().clone());
        }

        tracing::debug!(module = %deferred.name, "Loading view module");
        match deferred.module.load().await {
            Ok(view) => {
                let view = self
                    .loaded
                    .entry(deferred.name.clone())
                    .or_insert(view)
                    .value()
                    .clone();
                metrics::record_module_load(&deferred.name, "loaded");
                metrics::record_loaded_modules(self.loaded.len());
                tracing::info!(module = %deferred.name, "View module loaded");
                Ok(view)
            }
            Err(e) => {
                metrics::record_module_load(&deferred.name, "failed");
                tracing::warn!(module = %deferred.name, error = %e, "View module failed to load");
                Err(e)
            }
        }
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.loaded.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }
}
