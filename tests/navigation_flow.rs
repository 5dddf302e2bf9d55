//! End-to-end navigation: deferred loads, supersession, failures.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use ccnta_shell::config::ShellConfig;
use ccnta_shell::host::NavigationError;
use ccnta_shell::views::{ViewDescriptor, ViewRegistry};
use ccnta_shell::NavigationOutcome;

mod common;

fn active_labels(items: &[ccnta_shell::navigation::RenderedItem]) -> Vec<&str> {
    items
        .iter()
        .filter(|i| i.is_active)
        .map(|i| i.label.as_str())
        .collect()
}

#[tokio::test]
async fn test_stale_navigation_never_mounts() {
    let gate = common::Gate::new();
    let shell = common::shell_with(ShellConfig::default(), common::gated_notes_registry(&gate));

    assert!(shell.navigate("/home").await.is_mounted());

    let pending = {
        let shell = shell.clone();
        tokio::spawn(async move { shell.navigate("/notes/draft/1").await })
    };
    gate.started().await;

    let home = shell.navigate("/home").await;
    assert!(home.is_mounted());

    gate.open();
    let stale = pending.await.unwrap();
    assert!(matches!(stale, NavigationOutcome::Superseded));

    let snapshot = shell.snapshot();
    assert_eq!(snapshot.leaf_name(), Some("home"));
    assert_eq!(active_labels(&snapshot.menu), ["Home"]);
}

#[tokio::test]
async fn test_later_navigation_wins_when_both_pending() {
    let gate = common::Gate::new();
    let shell = common::shell_with(ShellConfig::default(), common::gated_notes_registry(&gate));

    let first = {
        let shell = shell.clone();
        tokio::spawn(async move { shell.navigate("/notes/draft/1").await })
    };
    gate.started().await;

    let second = {
        let shell = shell.clone();
        tokio::spawn(async move { shell.navigate("/notes/edit/9").await })
    };
    gate.started().await;

    gate.open();
    let first = first.await.unwrap();
    let second = second.await.unwrap();

    assert!(matches!(first, NavigationOutcome::Superseded));
    let snapshot = second.snapshot().expect("latest navigation mounts");
    assert_eq!(snapshot.leaf_name(), Some("note-editor"));
    assert_eq!(snapshot.params().get("id").map(String::as_str), Some("9"));
    assert!(Arc::ptr_eq(snapshot, &shell.snapshot()));
}

#[tokio::test]
async fn test_previous_view_stays_while_loading() {
    let gate = common::Gate::new();
    let shell = common::shell_with(ShellConfig::default(), common::gated_notes_registry(&gate));
    shell.navigate("/home").await;

    let pending = {
        let shell = shell.clone();
        tokio::spawn(async move { shell.navigate("/notes").await })
    };
    gate.started().await;
    assert_eq!(shell.snapshot().leaf_name(), Some("home"));

    gate.open();
    assert!(pending.await.unwrap().is_mounted());
    assert_eq!(shell.snapshot().leaf_name(), Some("note-list"));
}

#[tokio::test]
async fn test_load_failure_keeps_prior_view_and_retries() {
    let mut registry = ViewRegistry::new();
    registry.register_eager(ViewDescriptor::new("home", "Home"));
    let calls = common::register_flaky(&mut registry, ViewDescriptor::new("notes", "Notes"), 1);
    common::register_ready(&mut registry, &["note-list", "note-editor", "draft"]);
    let shell = common::shell_with(ShellConfig::default(), registry);

    shell.navigate("/home").await;

    let failed = shell.navigate("/notes").await;
    let error = failed.error().expect("first load fails");
    assert!(matches!(error, NavigationError::Load(_)));
    assert!(error.is_recoverable());
    assert_eq!(shell.snapshot().leaf_name(), Some("home"));

    let retried = shell.navigate("/notes").await;
    assert!(retried.is_mounted());
    assert_eq!(shell.snapshot().leaf_name(), Some("note-list"));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_modules_load_once() {
    let gate = common::Gate::new();
    gate.open();
    let shell = common::shell_with(ShellConfig::default(), common::gated_notes_registry(&gate));

    for path in ["/notes", "/notes/edit/1", "/home", "/notes/draft/3"] {
        assert!(shell.navigate(path).await.is_mounted(), "{path}");
    }
    assert_eq!(gate.calls(), 1);
    assert!(shell.navigator().modules().is_loaded("notes"));
}

#[tokio::test]
async fn test_same_path_renders_identically() {
    let shell = ccnta_shell::start(ShellConfig::default()).unwrap();

    let first = shell.navigate("/notes/edit/1").await;
    let second = shell.navigate("/notes/edit/1").await;

    let first = serde_json::to_value(first.snapshot().unwrap().as_ref()).unwrap();
    let second = serde_json::to_value(second.snapshot().unwrap().as_ref()).unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_tabs_follow_child_route() {
    let shell = ccnta_shell::start(ShellConfig::default()).unwrap();

    for (path, tab) in [
        ("/notes", "NOTES"),
        ("/notes/edit/1", "EDITOR"),
        ("/notes/draft/1", "DRAFTS"),
    ] {
        let outcome = shell.navigate(path).await;
        let snapshot = outcome.snapshot().expect("mounted");
        assert_eq!(active_labels(&snapshot.views[0].tabs), [tab], "{path}");
    }

    // The side entry links to /notes/all, so only the list activates it.
    shell.navigate("/notes").await;
    assert_eq!(active_labels(&shell.snapshot().menu), ["Task"]);
    shell.navigate("/notes/edit/1").await;
    assert!(active_labels(&shell.snapshot().menu).is_empty());
}

#[tokio::test]
async fn test_unmatched_link_reports_no_match() {
    let shell = ccnta_shell::start(ShellConfig::default()).unwrap();
    shell.navigate("/home").await;

    let outcome = shell.navigate("/messages").await;
    assert!(outcome.error().unwrap().is_no_match());
    assert_eq!(active_labels(&shell.snapshot().menu), ["Home"]);
}

#[tokio::test]
async fn test_render_text_shows_menu_and_outlets() {
    let shell = ccnta_shell::start(ShellConfig::default()).unwrap();
    shell.navigate("/notes/edit/5").await;

    let text = shell.render_text();
    assert!(text.contains("  ☑  Task"), "{text}");
    assert!(text.contains("[active]"));
    assert!(text.contains("(4)"));
    assert!(text.contains("@ /notes/edit/5"));
    assert!(text.contains("[note-editor] Note editor {id=5}"));
}
