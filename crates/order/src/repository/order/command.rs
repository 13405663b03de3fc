use crate::{
    abstract_trait::order::repository::OrderCommandRepositoryTrait,
    domain::requests::order::CreateOrderRecordRequest,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(&self, req: &CreateOrderRecordRequest) -> Result<i32, RepositoryError> {
        // Prices arrive as text; the casts let Postgres do the coercion and
        // reject anything that is not an integer.
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO orders (
                timestamp, user_name, main_course, main_course_price,
                combo, combo_price, drink, drink_price,
                dessert, dessert_price, total
            ) VALUES (
                $1, $2, $3, $4::text::int,
                $5, $6::text::int, $7, $8::text::int,
                $9, $10::text::int, $11::text::int
            )
            RETURNING id
            "#,
        )
        .bind(&req.timestamp)
        .bind(&req.user_name)
        .bind(&req.main_course)
        .bind(&req.main_course_price)
        .bind(&req.combo)
        .bind(&req.combo_price)
        .bind(&req.drink)
        .bind(&req.drink_price)
        .bind(&req.dessert)
        .bind(&req.dessert_price)
        .bind(&req.total)
        .fetch_one(&self.db)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create order for user {:?}: {:?}",
                req.user_name, err
            );
            RepositoryError::from(err)
        })?;

        info!("✅ Created order ID {} for user {:?}", id, req.user_name);
        Ok(id)
    }
}
