//! PostgreSQL implementation of the catalog store.

use async_trait::async_trait;
use carta_model::{Category, CategoryId, Product, ProductId};
use sqlx::{
    PgPool, Postgres, QueryBuilder,
    postgres::PgPoolOptions,
};
use std::fmt;
use tracing::info;

use crate::error::{CatalogError, Result};
use crate::store::traits::{CatalogStore, CategoryOrder, ProductFilter};

#[derive(Clone)]
pub struct PostgresCatalogStore {
    pool: PgPool,
}

impl fmt::Debug for PostgresCatalogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresCatalogStore")
            .field("pool_size", &self.pool.size())
            .field("idle_connections", &self.pool.num_idle())
            .finish()
    }
}

impl PostgresCatalogStore {
    pub async fn new(connection_string: &str) -> Result<Self> {
        let max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(5);

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .test_before_acquire(true)
            .connect(connection_string)
            .await
            .map_err(|e| {
                CatalogError::Store(format!("database connection failed: {e}"))
            })?;

        info!(max_connections, "database pool initialized");

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the catalog tables when missing. The `order_index` uniqueness
    /// constraint is deferred so a pairwise swap can move both rows inside
    /// one transaction.
    pub async fn initialize_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS categories (
                id UUID PRIMARY KEY,
                name TEXT NOT NULL,
                order_index INTEGER NOT NULL,
                CONSTRAINT categories_order_index_key
                    UNIQUE (order_index) DEFERRABLE INITIALLY DEFERRED
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(store_err)?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id UUID PRIMARY KEY,
                name TEXT NOT NULL,
                price NUMERIC(10, 2) NOT NULL CHECK (price >= 0),
                description TEXT,
                category_id UUID NOT NULL REFERENCES categories(id),
                image_url TEXT,
                is_campaign BOOLEAN NOT NULL DEFAULT FALSE,
                created_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(store_err)?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS products_category_id_idx ON products (category_id)",
        )
        .execute(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(())
    }
}

fn store_err(e: sqlx::Error) -> CatalogError {
    CatalogError::Store(e.to_string())
}

#[async_trait]
impl CatalogStore for PostgresCatalogStore {
    async fn list_categories(&self, order: CategoryOrder) -> Result<Vec<Category>> {
        let sql = match order {
            CategoryOrder::DisplayIndex => {
                "SELECT id, name, order_index FROM categories ORDER BY order_index ASC"
            }
            CategoryOrder::Name => {
                "SELECT id, name, order_index FROM categories ORDER BY name ASC"
            }
        };

        sqlx::query_as::<_, Category>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(store_err)
    }

    async fn get_category(&self, id: CategoryId) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            "SELECT id, name, order_index FROM categories WHERE id = $1",
        )
        .bind(id.to_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)
    }

    async fn insert_category(&self, category: &Category) -> Result<()> {
        sqlx::query(
            "INSERT INTO categories (id, name, order_index) VALUES ($1, $2, $3)",
        )
        .bind(category.id.to_uuid())
        .bind(&category.name)
        .bind(category.order_index)
        .execute(&self.pool)
        .await
        .map_err(store_err)?;
        Ok(())
    }

    async fn rename_category(&self, id: CategoryId, name: &str) -> Result<Category> {
        sqlx::query_as::<_, Category>(
            "UPDATE categories SET name = $2 WHERE id = $1 RETURNING id, name, order_index",
        )
        .bind(id.to_uuid())
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?
        .ok_or_else(|| CatalogError::NotFound(format!("category {id}")))
    }

    async fn delete_category(&self, id: CategoryId) -> Result<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id.to_uuid())
            .execute(&self.pool)
            .await
            .map_err(store_err)?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::NotFound(format!("category {id}")));
        }
        Ok(())
    }

    async fn update_category_order(&self, id: CategoryId, new_index: i32) -> Result<()> {
        let result = sqlx::query("UPDATE categories SET order_index = $2 WHERE id = $1")
            .bind(id.to_uuid())
            .bind(new_index)
            .execute(&self.pool)
            .await
            .map_err(store_err)?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::NotFound(format!("category {id}")));
        }
        Ok(())
    }

    async fn swap_category_order(
        &self,
        first: CategoryId,
        first_index: i32,
        second: CategoryId,
        second_index: i32,
    ) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(store_err)?;

        sqlx::query("UPDATE categories SET order_index = $2 WHERE id = $1")
            .bind(first.to_uuid())
            .bind(second_index)
            .execute(&mut *tx)
            .await
            .map_err(store_err)?;

        sqlx::query("UPDATE categories SET order_index = $2 WHERE id = $1")
            .bind(second.to_uuid())
            .bind(first_index)
            .execute(&mut *tx)
            .await
            .map_err(store_err)?;

        tx.commit().await.map_err(store_err)
    }

    async fn delete_category_cascade(&self, id: CategoryId) -> Result<u64> {
        let mut tx = self.pool.begin().await.map_err(store_err)?;

        let removed = sqlx::query("DELETE FROM products WHERE category_id = $1")
            .bind(id.to_uuid())
            .execute(&mut *tx)
            .await
            .map_err(store_err)?
            .rows_affected();

        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id.to_uuid())
            .execute(&mut *tx)
            .await
            .map_err(store_err)?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::NotFound(format!("category {id}")));
        }

        tx.commit().await.map_err(store_err)?;
        Ok(removed)
    }

    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT id, name, price, description, category_id, image_url, is_campaign, created_at \
             FROM products WHERE 1 = 1",
        );

        if let Some(category_id) = filter.category_id {
            builder.push(" AND category_id = ");
            builder.push_bind(category_id.to_uuid());
        }
        if filter.campaign_only {
            builder.push(" AND is_campaign = TRUE");
        }
        builder.push(" ORDER BY created_at DESC");

        builder
            .build_query_as::<Product>()
            .fetch_all(&self.pool)
            .await
            .map_err(store_err)
    }

    async fn insert_product(&self, product: &Product) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO products
                (id, name, price, description, category_id, image_url, is_campaign, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(product.id.to_uuid())
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.description)
        .bind(product.category_id.to_uuid())
        .bind(&product.image_url)
        .bind(product.is_campaign)
        .bind(product.created_at)
        .execute(&self.pool)
        .await
        .map_err(store_err)?;
        Ok(())
    }

    async fn delete_product(&self, id: ProductId) -> Result<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.to_uuid())
            .execute(&self.pool)
            .await
            .map_err(store_err)?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::NotFound(format!("product {id}")));
        }
        Ok(())
    }
}
