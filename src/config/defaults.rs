//! Built-in application configuration.
//!
//! The route table is registered as two trees: the root tree (default
//! redirect plus the eagerly available home view) and the notes feature
//! subtree, whose views are all deferred modules.

use crate::config::schema::{NavItemConfig, RouteConfig};

/// Side navigation entries of the application.
pub fn navigation() -> Vec<NavItemConfig> {
    vec![
        NavItemConfig::new("Home").link("/home"),
        NavItemConfig::new("Profile")
            .icon("far", "user")
            .badge("active")
            .link("/profile"),
        NavItemConfig::new("Notifications")
            .icon("far", "bell")
            .badge(4i64)
            .link("/notifications"),
        NavItemConfig::new("Messages")
            .icon("far", "message")
            .badge(6i64)
            .link("/messages"),
        NavItemConfig::new("Activity")
            .icon("fas", "chart-line")
            .badge(6i64)
            .link("/activities"),
        NavItemConfig::new("Task").badge(2i64).link("/notes/all"),
    ]
}

/// Root tree: `'' → home` and the home view.
pub fn root_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::redirect("", "home").full(),
        RouteConfig::component("home", "home"),
    ]
}

/// Notes feature subtree, mounted inside the notes tab container.
pub fn notes_routes() -> Vec<RouteConfig> {
    vec![RouteConfig::lazy("notes", "notes").with_children(vec![
        RouteConfig::redirect("", "all").full(),
        RouteConfig::lazy("all", "note-list"),
        RouteConfig::lazy("new/:projectId", "note-editor"),
        RouteConfig::lazy("edit/:id", "note-editor"),
        RouteConfig::lazy("draft/:projectId", "draft"),
    ])]
}

/// The merged application route table.
pub fn app_routes() -> Vec<RouteConfig> {
    let mut routes = root_routes();
    routes.extend(notes_routes());
    routes
}
