use crate::{
    abstract_trait::order::{
        repository::{DynOrderCommandRepository, DynOrderQueryRepository, DynSchemaRepository},
        service::{DynOrderCommandService, DynOrderQueryService},
    },
    config::ValidationMode,
    repository::{
        order::{OrderCommandRepository, OrderQueryRepository},
        schema::SchemaRepository,
    },
    service::{
        bootstrap::SchemaBootstrapper,
        order::{OrderCommandService, OrderQueryService},
    },
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub order_query: DynOrderQueryService,
    pub order_command: DynOrderCommandService,
    pub bootstrapper: SchemaBootstrapper,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("order_query", &"OrderQueryService")
            .field("order_command", &"OrderCommandService")
            .field("bootstrapper", &"SchemaBootstrapper")
            .finish()
    }
}

/// Storage backends the services are built on. Swappable so the whole stack
/// can run against something other than Postgres.
#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub schema: DynSchemaRepository,
    pub order_query: DynOrderQueryRepository,
    pub order_command: DynOrderCommandRepository,
    pub validation: ValidationMode,
}

impl DependenciesInjectDeps {
    pub fn postgres(pool: ConnectionPool, validation: ValidationMode) -> Self {
        Self {
            schema: Arc::new(SchemaRepository::new(pool.clone())),
            order_query: Arc::new(OrderQueryRepository::new(pool.clone())),
            order_command: Arc::new(OrderCommandRepository::new(pool)),
            validation,
        }
    }
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps {
            schema,
            order_query,
            order_command,
            validation,
        } = deps;

        let order_query =
            Arc::new(OrderQueryService::new(order_query, registry)) as DynOrderQueryService;
        let order_command = Arc::new(OrderCommandService::new(
            order_command,
            validation,
            registry,
        )) as DynOrderCommandService;
        let bootstrapper = SchemaBootstrapper::new(schema, registry);

        Self {
            order_query,
            order_command,
            bootstrapper,
        }
    }
}
