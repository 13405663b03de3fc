#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use meal_order::{
    abstract_trait::order::repository::{
        OrderCommandRepositoryTrait, OrderQueryRepositoryTrait, SchemaRepositoryTrait,
    },
    config::ValidationMode,
    di::DependenciesInjectDeps,
    domain::requests::order::CreateOrderRecordRequest,
    handler::AppRouter,
    model::order::OrderSummary,
    state::AppState,
};
use serde_json::Value;
use shared::errors::RepositoryError;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};
use tower::ServiceExt;

#[derive(Debug, Clone)]
pub struct StoredOrder {
    pub id: i32,
    pub record: CreateOrderRecordRequest,
    pub total: Option<i32>,
}

/// Stand-in for the `orders` table: enforces integer columns the way
/// Postgres would and hands out increasing ids.
#[derive(Default)]
pub struct InMemoryOrders {
    rows: Mutex<Vec<StoredOrder>>,
    table_exists: AtomicBool,
    pub schema_calls: AtomicUsize,
    pub statements: AtomicUsize,
}

impl InMemoryOrders {
    pub fn ready() -> Arc<Self> {
        let store = Self::default();
        store.table_exists.store(true, Ordering::SeqCst);
        Arc::new(store)
    }

    pub fn without_table() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn rows(&self) -> Vec<StoredOrder> {
        self.rows.lock().unwrap().clone()
    }

    fn check_table(&self) -> Result<(), RepositoryError> {
        if self.table_exists.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(RepositoryError::Custom(
                "relation \"orders\" does not exist".into(),
            ))
        }
    }
}

fn cast_int(value: &Option<String>) -> Result<Option<i32>, RepositoryError> {
    match value {
        None => Ok(None),
        Some(text) => text.trim().parse::<i32>().map(Some).map_err(|_| {
            RepositoryError::Custom(format!(
                "invalid input syntax for type integer: \"{text}\""
            ))
        }),
    }
}

#[async_trait]
impl SchemaRepositoryTrait for InMemoryOrders {
    async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        self.schema_calls.fetch_add(1, Ordering::SeqCst);
        self.table_exists.store(true, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for InMemoryOrders {
    async fn create_order(&self, req: &CreateOrderRecordRequest) -> Result<i32, RepositoryError> {
        self.statements.fetch_add(1, Ordering::SeqCst);
        self.check_table()?;

        for price in [
            &req.main_course_price,
            &req.combo_price,
            &req.drink_price,
            &req.dessert_price,
        ] {
            cast_int(price)?;
        }
        let total = cast_int(&req.total)?;

        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i32 + 1;
        rows.push(StoredOrder {
            id,
            record: req.clone(),
            total,
        });
        Ok(id)
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for InMemoryOrders {
    async fn find_all(&self) -> Result<Vec<OrderSummary>, RepositoryError> {
        self.statements.fetch_add(1, Ordering::SeqCst);
        self.check_table()?;

        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .rev()
            .map(|row| OrderSummary {
                user_name: row.record.user_name.clone(),
                main_course: row.record.main_course.clone(),
                total: row.total,
                timestamp: row.record.timestamp.clone(),
            })
            .collect())
    }
}

/// Every call fails as if the database were unreachable.
pub struct UnreachableStorage;

const UNREACHABLE: &str = "error communicating with database: Connection refused (os error 111)";

#[async_trait]
impl SchemaRepositoryTrait for UnreachableStorage {
    async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        Err(RepositoryError::Custom(UNREACHABLE.into()))
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for UnreachableStorage {
    async fn create_order(&self, _req: &CreateOrderRecordRequest) -> Result<i32, RepositoryError> {
        Err(RepositoryError::Custom(UNREACHABLE.into()))
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for UnreachableStorage {
    async fn find_all(&self) -> Result<Vec<OrderSummary>, RepositoryError> {
        Err(RepositoryError::Custom(UNREACHABLE.into()))
    }
}

pub fn in_memory_deps(store: Arc<InMemoryOrders>, validation: ValidationMode) -> DependenciesInjectDeps {
    DependenciesInjectDeps {
        schema: store.clone(),
        order_query: store.clone(),
        order_command: store,
        validation,
    }
}

pub fn unreachable_deps() -> DependenciesInjectDeps {
    let storage = Arc::new(UnreachableStorage);
    DependenciesInjectDeps {
        schema: storage.clone(),
        order_query: storage.clone(),
        order_command: storage,
        validation: ValidationMode::Passthrough,
    }
}

pub fn app_with(deps: DependenciesInjectDeps) -> Router {
    AppRouter::build(Arc::new(AppState::from_deps(deps)))
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await;
    (status, serde_json::from_slice(&body).unwrap())
}

pub async fn post_json(app: &Router, uri: &str, payload: &Value) -> (StatusCode, Value) {
    let (status, body) = send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
    )
    .await;
    (status, serde_json::from_slice(&body).unwrap())
}
