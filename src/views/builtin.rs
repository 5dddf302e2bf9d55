//! The application's own views.
//!
//! `home` is eager. The notes feature (tab container, list, editor, drafts)
//! ships as deferred modules.

use std::sync::Arc;
use std::time::Duration;

use crate::config::LoaderConfig;
use crate::navigation::NavigationItem;
use crate::views::{LoadError, ViewDescriptor, ViewRegistry};

/// Tabs exposed by the notes container. Relative links resolve against the
/// URL the container is mounted at.
pub fn notes_tabs() -> Vec<NavigationItem> {
    vec![
        NavigationItem::new("NOTES")
            .with_icon("far", "folder")
            .with_link("/notes/all"),
        NavigationItem::new("EDITOR")
            .with_icon("far", "file-alt")
            .with_link("edit/1"),
        NavigationItem::new("DRAFTS")
            .with_icon("far", "file")
            .with_link("draft/1"),
    ]
}

/// Register every built-in view.
pub fn register_builtin_views(registry: &mut ViewRegistry, loader: &LoaderConfig) {
    let latency = Duration::from_millis(loader.simulated_latency_ms);

    registry.register_eager(ViewDescriptor::new("home", "Home"));

    register_module(
        registry,
        latency,
        ViewDescriptor::new("notes", "Notes").with_tabs(notes_tabs()),
    );
    register_module(registry, latency, ViewDescriptor::new("note-list", "All notes"));
    register_module(registry, latency, ViewDescriptor::new("note-editor", "Note editor"));
    register_module(registry, latency, ViewDescriptor::new("draft", "Drafts"));
}

fn register_module(registry: &mut ViewRegistry, latency: Duration, view: ViewDescriptor) {
    let name = view.name.clone();
    let view = Arc::new(view);
    registry.register_deferred(name, move || {
        let view = view.clone();
        async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            Ok::<_, LoadError>(view)
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::Registration;

    #[test]
    fn test_builtin_registrations() {
        let mut registry = ViewRegistry::new();
        register_builtin_views(&mut registry, &LoaderConfig::default());

        assert!(matches!(registry.get("home"), Some(Registration::Eager(_))));
        for name in ["notes", "note-list", "note-editor", "draft"] {
            assert!(
                matches!(registry.get(name), Some(Registration::Deferred(_))),
                "{name} should be deferred"
            );
        }
    }

    #[tokio::test]
    async fn test_notes_module_exposes_tabs() {
        let mut registry = ViewRegistry::new();
        register_builtin_views(&mut registry, &LoaderConfig::default());

        let Some(Registration::Deferred(notes)) = registry.get("notes") else {
            panic!("notes should be deferred");
        };
        let view = notes.module.load().await.unwrap();
        let labels: Vec<&str> = view.tabs.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["NOTES", "EDITOR", "DRAFTS"]);
    }
}
