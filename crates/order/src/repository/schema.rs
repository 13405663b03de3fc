use crate::abstract_trait::order::repository::SchemaRepositoryTrait;
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};

const CREATE_ORDERS_TABLE: &str = include_str!("../../sql/create_orders.sql");

pub struct SchemaRepository {
    db: ConnectionPool,
}

impl SchemaRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SchemaRepositoryTrait for SchemaRepository {
    async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        sqlx::query(CREATE_ORDERS_TABLE).execute(&self.db).await?;
        Ok(())
    }
}
