use crate::{
    config::Config,
    di::{DependenciesInject, DependenciesInjectDeps},
};
use prometheus_client::registry::Registry;
use shared::{
    config::ConnectionPool,
    utils::{SystemMetrics, run_metrics_collector},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .field("registry", &self.registry)
            .finish()
    }
}

impl AppState {
    /// Production wiring: Postgres repositories plus a background process
    /// metrics collector.
    pub fn new(pool: ConnectionPool, config: &Config) -> Self {
        let system_metrics = Arc::new(SystemMetrics::new());
        let mut registry = Registry::default();
        system_metrics.register(&mut registry);

        tokio::spawn(run_metrics_collector(system_metrics));

        let deps = DependenciesInjectDeps::postgres(pool, config.validation);
        Self::with_registry(deps, registry)
    }

    pub fn from_deps(deps: DependenciesInjectDeps) -> Self {
        Self::with_registry(deps, Registry::default())
    }

    fn with_registry(deps: DependenciesInjectDeps, mut registry: Registry) -> Self {
        let di_container = DependenciesInject::new(deps, &mut registry);

        Self {
            di_container,
            registry: Arc::new(registry),
        }
    }
}
