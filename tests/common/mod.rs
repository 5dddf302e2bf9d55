//! Shared fixtures for shell integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::{watch, Notify};

use ccnta_shell::config::ShellConfig;
use ccnta_shell::lifecycle::ShellBuilder;
use ccnta_shell::views::builtin::notes_tabs;
use ccnta_shell::views::{LoadError, ViewDescriptor, ViewRegistry};
use ccnta_shell::Shell;

/// Holds a module load until opened; counts load attempts.
#[derive(Clone)]
pub struct Gate {
    open: Arc<watch::Sender<bool>>,
    started: Arc<Notify>,
    calls: Arc<AtomicUsize>,
}

impl Gate {
    pub fn new() -> Self {
        let (open, _) = watch::channel(false);
        Self {
            open: Arc::new(open),
            started: Arc::new(Notify::new()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn open(&self) {
        self.open.send_replace(true);
    }

    /// Resolves once a load has started waiting on this gate.
    pub async fn started(&self) {
        self.started.notified().await;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Register `view` as a deferred module held by this gate.
    pub fn register(&self, registry: &mut ViewRegistry, view: ViewDescriptor) {
        let gate = self.clone();
        let name = view.name.clone();
        let view = Arc::new(view);
        registry.register_deferred(name, move || {
            let gate = gate.clone();
            let view = view.clone();
            async move {
                gate.calls.fetch_add(1, Ordering::SeqCst);
                gate.started.notify_one();
                let mut open = gate.open.subscribe();
                let _ = open.wait_for(|open| *open).await;
                Ok::<_, LoadError>(view)
            }
        });
    }
}

/// Register `view` as a deferred module failing its first `failures` loads.
pub fn register_flaky(
    registry: &mut ViewRegistry,
    view: ViewDescriptor,
    failures: usize,
) -> Arc<AtomicUsize> {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let name = view.name.clone();
    let view = Arc::new(view);
    registry.register_deferred(name.clone(), move || {
        let attempt = counter.fetch_add(1, Ordering::SeqCst);
        let view = view.clone();
        let name = name.clone();
        async move {
            if attempt < failures {
                Err(LoadError::new(name, "chunk unavailable"))
            } else {
                Ok(view)
            }
        }
    });
    calls
}

/// Register every deferred view the default routes use as immediately ready.
pub fn register_ready(registry: &mut ViewRegistry, names: &[&str]) {
    for name in names {
        let view = Arc::new(ViewDescriptor::new(*name, *name));
        registry.register_deferred(*name, move || {
            let view = view.clone();
            async move { Ok::<_, LoadError>(view) }
        });
    }
}

/// Registry for the default routes where `notes` is held by `gate`.
pub fn gated_notes_registry(gate: &Gate) -> ViewRegistry {
    let mut registry = ViewRegistry::new();
    registry.register_eager(ViewDescriptor::new("home", "Home"));
    gate.register(
        &mut registry,
        ViewDescriptor::new("notes", "Notes").with_tabs(notes_tabs()),
    );
    register_ready(&mut registry, &["note-list", "note-editor", "draft"]);
    registry
}

pub fn shell_with(config: ShellConfig, registry: ViewRegistry) -> Shell {
    ShellBuilder::new(config)
        .views(registry)
        .build()
        .expect("shell should start")
}
