//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration
//! - Register views, compile the route table
//! - Check navigation links against the table
//! - Assemble the `Shell`
//!
//! # Design Decisions
//! - Fail fast: structural errors and redirect cycles reached from a link are fatal
//! - Links that match no route only warn, unless `router.strict_links` is set
//! - Nothing is loaded here; deferred views load on first navigation

use std::sync::Arc;

use crate::config::validation::{format_errors, validate_config, validate_links};
use crate::config::{ShellConfig, ValidationError};
use crate::host::{Navigator, Shell};
use crate::icons::{IconLibrary, IconProvider};
use crate::navigation::{NavigationItem, NavigationModel};
use crate::routing::{RouteTable, TableError};
use crate::views::builtin::register_builtin_views;
use crate::views::ViewRegistry;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Invalid configuration: {}", format_errors(.0))]
    Config(Vec<ValidationError>),

    #[error("Route table: {0}")]
    Table(#[from] TableError),

    #[error("Navigation links: {}", format_errors(.0))]
    Links(Vec<ValidationError>),
}

/// Builds a `Shell` from configuration.
///
/// Views default to the built-in set and icons to `IconLibrary::standard()`.
pub struct ShellBuilder {
    config: ShellConfig,
    registry: Option<ViewRegistry>,
    icons: Option<Arc<dyn IconProvider>>,
}

impl ShellBuilder {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config,
            registry: None,
            icons: None,
        }
    }

    /// Replace the built-in views.
    pub fn views(mut self, registry: ViewRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn icons(mut self, icons: Arc<dyn IconProvider>) -> Self {
        self.icons = Some(icons);
        self
    }

    pub fn build(self) -> Result<Shell, StartupError> {
        let config = self.config;
        validate_config(&config).map_err(StartupError::Config)?;

        let registry = self.registry.unwrap_or_else(|| {
            let mut registry = ViewRegistry::new();
            register_builtin_views(&mut registry, &config.loader);
            registry
        });
        let table = RouteTable::build(&config.routes, &registry)?;

        let menu = NavigationModel::new(
            config
                .navigation
                .iter()
                .map(NavigationItem::from_config)
                .collect(),
        );

        check_links(&config, &menu, &table, &registry)?;

        let icons = self
            .icons
            .unwrap_or_else(|| Arc::new(IconLibrary::standard()));

        tracing::info!(
            navigation_items = menu.items().len(),
            routes = config.routes.len(),
            views = registry.len(),
            max_redirects = config.router.max_redirects,
            "Shell started"
        );

        let navigator = Navigator::new(Arc::new(table), menu, config.router.max_redirects);
        Ok(Shell::new(navigator, icons))
    }
}

/// Build the shell with built-in views and standard icons.
pub fn start(config: ShellConfig) -> Result<Shell, StartupError> {
    ShellBuilder::new(config).build()
}

/// Side navigation links plus the absolute tab links of eager views.
///
/// Relative tab links depend on where their container mounts and are left
/// to resolve at navigation time.
fn check_links(
    config: &ShellConfig,
    menu: &NavigationModel,
    table: &RouteTable,
    registry: &ViewRegistry,
) -> Result<(), StartupError> {
    let limit = config.router.max_redirects;
    let mut errors = validate_links(menu, table, limit);

    for view in registry.eager_views() {
        let tabs: Vec<NavigationItem> = view
            .tabs
            .iter()
            .filter(|tab| tab.router_link().is_some_and(|link| link.starts_with('/')))
            .cloned()
            .collect();
        if !tabs.is_empty() {
            errors.extend(validate_links(&NavigationModel::new(tabs), table, limit));
        }
    }

    let (dangling, fatal): (Vec<_>, Vec<_>) = errors
        .into_iter()
        .partition(|e| e.is_dangling_link() && !config.router.strict_links);

    for warning in &dangling {
        tracing::warn!(%warning, "Navigation link has no route");
    }

    if fatal.is_empty() {
        Ok(())
    } else {
        Err(StartupError::Links(fatal))
    }
}
