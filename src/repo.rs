//! Data access for the `products` table. Each operation is a single-row
//! SQL statement; "not found" is signaled with `Option`/`bool`, never an
//! error variant.

use sqlx::SqlitePool;

use crate::models::{Product, ProductInput};

// Columns are listed explicitly so only API fields ever leave the table.
const PRODUCT_COLUMNS: &str = "id, name, description, price";

pub async fn list_products(pool: &SqlitePool) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(&format!("SELECT {PRODUCT_COLUMNS} FROM products"))
        .fetch_all(pool)
        .await
}

pub async fn get_product(pool: &SqlitePool, id: i64) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create_product(
    pool: &SqlitePool,
    input: &ProductInput,
) -> Result<Product, sqlx::Error> {
    sqlx::query_as::<_, Product>(&format!(
        "INSERT INTO products (name, description, price) VALUES ($1, $2, $3)
         RETURNING {PRODUCT_COLUMNS}"
    ))
    .bind(&input.name)
    .bind(&input.description)
    .bind(input.price)
    .fetch_one(pool)
    .await
}

/// Full replace of every non-id field. Returns `None` when the id is unknown.
pub async fn update_product(
    pool: &SqlitePool,
    id: i64,
    input: &ProductInput,
) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(&format!(
        "UPDATE products SET name = $1, description = $2, price = $3 WHERE id = $4
         RETURNING {PRODUCT_COLUMNS}"
    ))
    .bind(&input.name)
    .bind(&input.description)
    .bind(input.price)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Hard delete. Returns `false` when the id is unknown.
pub async fn delete_product(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
