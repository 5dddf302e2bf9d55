//! Navigation driver.
//!
//! # Responsibilities
//! - Resolve a path into a plan, then load the plan's deferred views
//! - Discard navigations superseded by a newer one
//! - Commit: update the side navigation's active flags, publish a snapshot
//! - Resolve a view's tab links the first time it mounts
//!
//! # State Machine (per navigation)
//! ```text
//! Start → resolve (segment match / redirect) ─ error ─→ Failed
//!            │
//!            ▼
//!         load views, outermost first ─ newer navigation ─→ Superseded
//!            │                        ─ module error ───→ Failed
//!            ▼
//!         commit (generation still current?) ─ no ─→ Superseded
//!            │
//!            ▼
//!         Mounted
//! ```
//!
//! # Design Decisions
//! - Each navigation takes the next generation number; only the latest may mount
//! - While loads are pending the previous snapshot stays published
//! - No timeout on loads: a hung module leaves the previous view in place

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use arc_swap::ArcSwap;
use dashmap::DashMap;
use tokio::sync::watch;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::validation::validate_links;
use crate::config::ValidationError;
use crate::host::snapshot::{MountedView, ShellSnapshot};
use crate::navigation::{NavigationModel, RenderedItem};
use crate::observability::metrics;
use crate::routing::{ResolveError, Resolver, RouteMatch, RoutePlan, RouteTable};
use crate::views::{LoadError, ModuleCache, ViewDescriptor};

/// Why a navigation did not mount anything.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Load(#[from] LoadError),
}

impl NavigationError {
    /// No route matched; the host decides what fallback to show.
    pub fn is_no_match(&self) -> bool {
        matches!(self, NavigationError::Resolve(ResolveError::NoMatch { .. }))
    }

    /// Retrying the same navigation may succeed (module load failures).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, NavigationError::Load(_))
    }

    fn metric_label(&self) -> &'static str {
        match self {
            NavigationError::Resolve(ResolveError::NoMatch { .. }) => "no_match",
            NavigationError::Resolve(ResolveError::RedirectCycle { .. }) => "redirect_cycle",
            NavigationError::Resolve(ResolveError::TooManyRedirects { .. }) => "too_many_redirects",
            NavigationError::Resolve(ResolveError::InvalidPath(_)) => "invalid_path",
            NavigationError::Load(_) => "load_failed",
        }
    }
}

/// Result of one navigation.
#[derive(Debug, Clone)]
pub enum NavigationOutcome {
    Mounted(Arc<ShellSnapshot>),
    /// A newer navigation started before this one could mount.
    Superseded,
    Failed(NavigationError),
}

impl NavigationOutcome {
    pub fn is_mounted(&self) -> bool {
        matches!(self, NavigationOutcome::Mounted(_))
    }

    pub fn snapshot(&self) -> Option<&Arc<ShellSnapshot>> {
        match self {
            NavigationOutcome::Mounted(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&NavigationError> {
        match self {
            NavigationOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Resolves, loads and mounts navigations; owns the side navigation model.
pub struct Navigator {
    table: Arc<RouteTable>,
    modules: ModuleCache,
    max_redirects: usize,
    menu: Mutex<NavigationModel>,
    generation: watch::Sender<u64>,
    snapshot: ArcSwap<ShellSnapshot>,
    /// Tab link problems per view name, filled on first mount.
    tab_links: DashMap<String, Vec<ValidationError>>,
}

impl Navigator {
    pub fn new(table: Arc<RouteTable>, menu: NavigationModel, max_redirects: usize) -> Self {
        let initial = ShellSnapshot {
            menu: menu.render(),
            ..ShellSnapshot::default()
        };
        let (generation, _) = watch::channel(0);

        Self {
            table,
            modules: ModuleCache::new(),
            max_redirects,
            menu: Mutex::new(menu),
            generation,
            snapshot: ArcSwap::from_pointee(initial),
            tab_links: DashMap::new(),
        }
    }

    /// The currently published snapshot.
    pub fn current(&self) -> Arc<ShellSnapshot> {
        self.snapshot.load_full()
    }

    pub fn menu(&self) -> Vec<RenderedItem> {
        self.current().menu.clone()
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn modules(&self) -> &ModuleCache {
        &self.modules
    }

    /// Tab links of `view` that did not resolve when it first mounted.
    /// `None` until a view with tabs has mounted under that name.
    pub fn tab_link_errors(&self, view: &str) -> Option<Vec<ValidationError>> {
        self.tab_links.get(view).map(|errors| errors.value().clone())
    }

    /// Resolve without loading or mounting anything.
    pub fn plan(&self, path: &str) -> Result<RoutePlan, ResolveError> {
        Resolver::new(&self.table, self.max_redirects).resolve(path)
    }

    /// Navigate to `path`. Supersedes every navigation still in flight.
    pub async fn navigate(&self, path: &str) -> NavigationOutcome {
        let mut generation = 0;
        self.generation.send_modify(|current| {
            *current += 1;
            generation = *current;
        });

        let span = tracing::info_span!("navigation", id = %Uuid::new_v4(), path = %path, generation);
        self.run(path, generation).instrument(span).await
    }

    async fn run(&self, path: &str, generation: u64) -> NavigationOutcome {
        let start = Instant::now();

        let plan = match self.plan(path) {
            Ok(plan) => plan,
            Err(e) => return self.fail(e.into(), start),
        };
        metrics::record_redirects(plan.redirects.len());
        tracing::debug!(url = %plan.url, views = plan.matches.len(), "Route resolved");

        let mut latest = self.generation.subscribe();
        let mut views = Vec::with_capacity(plan.matches.len());
        for route in &plan.matches {
            let view = tokio::select! {
                biased;
                _ = superseded(&mut latest, generation) => {
                    return self.superseded(start);
                }
                loaded = self.modules.load(&route.source) => match loaded {
                    Ok(view) => view,
                    Err(e) => return self.fail(e.into(), start),
                },
            };
            views.push(view);
        }

        for (route, view) in plan.matches.iter().zip(&views) {
            self.check_tab_links(route, view);
        }

        match self.commit(plan, views, generation) {
            Some(snapshot) => {
                tracing::info!(url = ?snapshot.url, view = ?snapshot.leaf_name(), "Navigation mounted");
                metrics::record_navigation("mounted", start);
                NavigationOutcome::Mounted(snapshot)
            }
            None => self.superseded(start),
        }
    }

    fn commit(
        &self,
        plan: RoutePlan,
        views: Vec<Arc<ViewDescriptor>>,
        generation: u64,
    ) -> Option<Arc<ShellSnapshot>> {
        let mut menu = self.menu.lock().unwrap_or_else(PoisonError::into_inner);
        if *self.generation.borrow() != generation {
            return None;
        }

        menu.set_active(&plan.url);
        let url = plan.url;
        let mounted = plan
            .matches
            .into_iter()
            .zip(views)
            .map(|(route, view)| {
                let tabs = if view.tabs.is_empty() {
                    Vec::new()
                } else {
                    let mut tabs = NavigationModel::with_base(view.tabs.clone(), &route.url);
                    tabs.set_active(&url);
                    tabs.render()
                };
                MountedView {
                    route: route.route,
                    url: route.url,
                    view,
                    params: route.params,
                    tabs,
                }
            })
            .collect();

        let snapshot = Arc::new(ShellSnapshot {
            url: Some(url),
            views: mounted,
            menu: menu.render(),
        });
        self.snapshot.store(snapshot.clone());
        Some(snapshot)
    }

    fn check_tab_links(&self, route: &RouteMatch, view: &ViewDescriptor) {
        if view.tabs.is_empty() || self.tab_links.contains_key(&view.name) {
            return;
        }
        let tabs = NavigationModel::with_base(view.tabs.clone(), &route.url);
        let errors = validate_links(&tabs, &self.table, self.max_redirects);
        for error in &errors {
            tracing::warn!(view = %view.name, %error, "Tab link does not resolve");
        }
        self.tab_links.insert(view.name.clone(), errors);
    }

    fn fail(&self, error: NavigationError, start: Instant) -> NavigationOutcome {
        tracing::warn!(error = %error, "Navigation failed");
        metrics::record_navigation(error.metric_label(), start);
        NavigationOutcome::Failed(error)
    }

    fn superseded(&self, start: Instant) -> NavigationOutcome {
        tracing::debug!("Navigation superseded");
        metrics::record_navigation("superseded", start);
        NavigationOutcome::Superseded
    }
}

/// Completes once the published generation differs from `generation`.
async fn superseded(latest: &mut watch::Receiver<u64>, generation: u64) {
    loop {
        if *latest.borrow_and_update() != generation {
            return;
        }
        if latest.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
