use crate::abstract_trait::order::repository::DynSchemaRepository;
use prometheus_client::{
    metrics::{counter::Counter, gauge::Gauge},
    registry::Registry,
};
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Clone, Default)]
pub struct BootstrapMetrics {
    /// 1 once the table is known to exist, 0 until then or after a failure.
    pub status: Gauge,
    pub failures: Counter,
}

impl BootstrapMetrics {
    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "schema_bootstrap_status",
            "Whether the orders table was confirmed at startup",
            self.status.clone(),
        );
        registry.register(
            "schema_bootstrap_failures",
            "Failed attempts to create the orders table",
            self.failures.clone(),
        );
    }
}

/// Makes sure the `orders` table exists. A failure is logged and counted but
/// never stops the server: requests then fail individually against storage.
#[derive(Clone)]
pub struct SchemaBootstrapper {
    schema: DynSchemaRepository,
    metrics: BootstrapMetrics,
}

impl SchemaBootstrapper {
    pub fn new(schema: DynSchemaRepository, registry: &mut Registry) -> Self {
        let metrics = BootstrapMetrics::default();
        metrics.register(registry);

        Self { schema, metrics }
    }

    pub fn metrics(&self) -> &BootstrapMetrics {
        &self.metrics
    }

    pub async fn run(&self) -> bool {
        match self.schema.ensure_schema().await {
            Ok(()) => {
                info!("✅ Table 'orders' is ready.");
                self.metrics.status.set(1);
                true
            }
            Err(e) => {
                error!("❌ Error creating table 'orders': {e}");
                self.metrics.status.set(0);
                self.metrics.failures.inc();
                false
            }
        }
    }

    /// Runs in the background; the handle is only awaited by tests.
    pub fn spawn(self) -> JoinHandle<bool> {
        tokio::spawn(async move { self.run().await })
    }
}
