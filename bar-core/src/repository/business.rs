//! Business repository

use crate::domain::{Business, BusinessId};
use crate::error::Result;
use async_trait::async_trait;
use sqlx::MySqlPool;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// Find business by internal ID
    async fn find_by_id(&self, id: BusinessId) -> Result<Option<Business>>;
}

pub struct BusinessRepositoryImpl {
    pool: MySqlPool,
}

impl BusinessRepositoryImpl {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BusinessRepository for BusinessRepositoryImpl {
    async fn find_by_id(&self, id: BusinessId) -> Result<Option<Business>> {
        let business = sqlx::query_as::<_, Business>(
            r#"
            SELECT id, legal_name, legal_type, identifier, tax_id, nano_id
            FROM businesses
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(business)
    }
}
