//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define shell metrics (navigations, redirects, module loads)
//! - Install an in-process Prometheus recorder on request
//!
//! # Metrics
//! - `shell_navigations_total` (counter): navigations by outcome
//! - `shell_navigation_duration_seconds` (histogram): time from request to mount
//! - `shell_redirects_total` (counter): redirect hops followed
//! - `shell_module_loads_total` (counter): deferred loads by module, result
//! - `shell_loaded_modules` (gauge): modules held by the cache
//!
//! # Design Decisions
//! - No HTTP listener; the rendered text is printed by the host on demand
//! - Without an installed recorder every call is a no-op

use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::config::ObservabilityConfig;

/// Install the Prometheus recorder. Returns `None` if one is already installed.
pub fn init_metrics() -> Option<PrometheusHandle> {
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics recorder");
            None
        }
    }
}

/// Install the recorder when `metrics_enabled` is set.
pub fn init_from_config(config: &ObservabilityConfig) -> Option<PrometheusHandle> {
    if !config.metrics_enabled {
        tracing::debug!("Metrics disabled");
        return None;
    }
    init_metrics()
}

pub fn record_navigation(outcome: &'static str, start: Instant) {
    counter!("shell_navigations_total", "outcome" => outcome).increment(1);
    histogram!("shell_navigation_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_redirects(count: usize) {
    if count > 0 {
        counter!("shell_redirects_total").increment(count as u64);
    }
}

pub fn record_module_load(module: &str, result: &'static str) {
    counter!("shell_module_loads_total", "module" => module.to_string(), "result" => result)
        .increment(1);
}

pub fn record_loaded_modules(count: usize) {
    gauge!("shell_loaded_modules").set(count as f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_follows_config() {
        let disabled = ObservabilityConfig {
            metrics_enabled: false,
            ..ObservabilityConfig::default()
        };
        assert!(init_from_config(&disabled).is_none());

        let handle = init_from_config(&ObservabilityConfig::default()).expect("recorder installed");
        record_navigation("mounted", Instant::now());
        assert!(handle.render().contains("shell_navigations_total"));
    }
}
