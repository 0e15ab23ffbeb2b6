use serde::{Deserialize, Serialize};

/// A persisted product row. Doubles as the JSON response shape.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

/// Validated request payload for create and update. `price` must be a JSON
/// number; a string like `"abc"` fails deserialization and never reaches
/// the database.
#[derive(Deserialize, Debug)]
pub struct ProductInput {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}
