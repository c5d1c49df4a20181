//! Product repository.

use sqlx::PgPool;
use tracing::instrument;

use super::RepositoryError;
use crate::models::{NewProduct, Product};

/// Repository for catalog reads and seeding.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All products, ordered by ID ascending.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a row fails to decode.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, image_url, weight_grams, composition, price_rub
            FROM products
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Insert products in one transaction, optionally replacing the catalog.
    ///
    /// Returns the number of inserted rows.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if a row violates a table constraint.
    /// Returns `RepositoryError::Database` for other database errors. Nothing
    /// is written on error.
    #[instrument(skip(self, products), fields(count = products.len()))]
    pub async fn insert_many(
        &self,
        products: &[NewProduct],
        replace: bool,
    ) -> Result<u64, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        if replace {
            sqlx::query("DELETE FROM products")
                .execute(&mut *tx)
                .await?;
        }

        let mut inserted = 0;
        for product in products {
            let result = sqlx::query(
                r"
                INSERT INTO products (name, image_url, weight_grams, composition, price_rub)
                VALUES ($1, $2, $3, $4, $5)
                ",
            )
            .bind(&product.name)
            .bind(product.image_url.as_deref())
            .bind(product.weight_grams)
            .bind(&product.composition)
            .bind(product.price_rub)
            .execute(&mut *tx)
            .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }
}
