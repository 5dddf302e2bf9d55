//! Named view registrations.

use std::collections::HashMap;
use std::sync::Arc;

use crate::views::{DeferredView, ViewDescriptor, ViewModule, ViewSource};

/// How a view name was registered.
#[derive(Debug, Clone)]
pub enum Registration {
    Eager(Arc<ViewDescriptor>),
    Deferred(DeferredView),
}

/// Views available to the route table, keyed by name.
#[derive(Debug, Default, Clone)]
pub struct ViewRegistry {
    views: HashMap<String, Registration>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view that is available without loading.
    pub fn register_eager(&mut self, view: ViewDescriptor) {
        self.views
            .insert(view.name.clone(), Registration::Eager(Arc::new(view)));
    }

    /// Register a view module loaded on first visit.
    pub fn register_deferred<M>(&mut self, name: impl Into<String>, module: M)
    where
        M: ViewModule + 'static,
    {
        let name = name.into();
        let deferred = DeferredView {
            name: name.clone(),
            module: Arc::new(module),
        };
        self.views.insert(name, Registration::Deferred(deferred));
    }

    pub fn get(&self, name: &str) -> Option<&Registration> {
        self.views.get(name)
    }

    /// Source for a `component` reference: only eager views qualify.
    pub fn component(&self, name: &str) -> Option<ViewSource> {
        match self.views.get(name)? {
            Registration::Eager(view) => Some(ViewSource::Ready(view.clone())),
            Registration::Deferred(_) => None,
        }
    }

    /// Source for a `load_component` reference; eager views are served as-is.
    pub fn load_component(&self, name: &str) -> Option<ViewSource> {
        match self.views.get(name)? {
            Registration::Eager(view) => Some(ViewSource::Ready(view.clone())),
            Registration::Deferred(deferred) => Some(ViewSource::Deferred(deferred.clone())),
        }
    }

    /// Eagerly registered views, for startup checks on their tabs.
    pub fn eager_views(&self) -> impl Iterator<Item = &Arc<ViewDescriptor>> {
        self.views.values().filter_map(|r| match r {
            Registration::Eager(view) => Some(view),
            Registration::Deferred(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::LoadError;

    #[test]
    fn test_component_requires_eager() {
        let mut registry = ViewRegistry::new();
        registry.register_eager(ViewDescriptor::new("home", "Home"));
        registry.register_deferred("draft", || async {
            Ok::<_, LoadError>(Arc::new(ViewDescriptor::new("draft", "Drafts")))
        });

        assert!(matches!(registry.component("home"), Some(ViewSource::Ready(_))));
        assert!(registry.component("draft").is_none());
        assert!(registry.component("missing").is_none());

        assert!(registry.load_component("draft").unwrap().is_deferred());
        assert!(!registry.load_component("home").unwrap().is_deferred());
        assert_eq!(registry.eager_views().count(), 1);
        assert_eq!(registry.len(), 2);
    }
}
