use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product, ProductChanges};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

use super::entity::ProductEntity;

pub struct ProductRepositorySqlite {
    pool: SqlitePool,
}

impl ProductRepositorySqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// CHECK constraint violations are bad input; everything else is a storage failure.
fn map_sqlx_error(operation: &'static str, err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.is_check_violation()
    {
        tracing::warn!(operation, error = %err, "product rejected by storage constraint");
        return RepositoryError::InvalidData;
    }
    tracing::error!(operation, error = %err, "product storage failure");
    RepositoryError::DatabaseError
}

#[async_trait]
impl ProductRepository for ProductRepositorySqlite {
    async fn get_products(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price, description, created_at, updated_at FROM products ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("get_products", e))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_product_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price, description, created_at, updated_at FROM products WHERE id = ?",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("get_product_by_id", e))?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn create_product(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let now = Utc::now();
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"INSERT INTO products (name, price, description, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, price, description, created_at, updated_at"#,
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.description)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("create_product", e))?;

        Ok(entity.into_domain())
    }

    async fn update_product(
        &self,
        id: ProductId,
        changes: &ProductChanges,
    ) -> Result<Product, RepositoryError> {
        // Single statement: the row is read and written atomically.
        let entity = sqlx::query_as::<_, ProductEntity>(
            r#"UPDATE products SET
                name = COALESCE(?, name),
                price = COALESCE(?, price),
                description = CASE WHEN ? THEN ? ELSE description END,
                updated_at = ?
            WHERE id = ?
            RETURNING id, name, price, description, created_at, updated_at"#,
        )
        .bind(&changes.name)
        .bind(changes.price)
        .bind(changes.description.is_some())
        .bind(changes.description.clone().flatten())
        .bind(Utc::now())
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update_product", e))?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_product", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
