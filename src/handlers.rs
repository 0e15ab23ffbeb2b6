use actix_web::error::InternalError;
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use log::{error, info};
use serde_json::json;
use sqlx::SqlitePool;

use crate::models::ProductInput;
use crate::repo;

fn product_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "detail": "Product not found" }))
}

/// Maps JSON body deserialization failures (missing `name`, non-numeric
/// `price`, malformed JSON) to 422 with the offending detail.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        InternalError::from_response(
            err,
            HttpResponse::UnprocessableEntity().json(json!({ "detail": detail })),
        )
        .into()
    })
}

#[get("/products")]
pub async fn list_products(db: web::Data<SqlitePool>) -> impl Responder {
    match repo::list_products(db.get_ref()).await {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(e) => {
            error!("Error listing products: {:?}", e);
            HttpResponse::InternalServerError().body(format!("Error: {:?}", e))
        }
    }
}

#[get("/products/{id}")]
pub async fn get_product_by_id(db: web::Data<SqlitePool>, id: web::Path<i64>) -> impl Responder {
    match repo::get_product(db.get_ref(), *id).await {
        Ok(Some(product)) => HttpResponse::Ok().json(product),
        Ok(None) => {
            info!("Product not found: {}", id);
            product_not_found()
        }
        Err(e) => {
            error!("Error fetching product {}: {:?}", id, e);
            HttpResponse::InternalServerError().body(format!("Error: {:?}", e))
        }
    }
}

#[post("/products")]
pub async fn create_new_product(
    db: web::Data<SqlitePool>,
    input: web::Json<ProductInput>,
) -> impl Responder {
    info!("Creating product: {:?}", input);
    match repo::create_product(db.get_ref(), &input).await {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(e) => {
            error!("Error creating product: {:?}", e);
            HttpResponse::InternalServerError().body(format!("Error: {:?}", e))
        }
    }
}

#[put("/products/{id}")]
pub async fn update_existing_product(
    db: web::Data<SqlitePool>,
    id: web::Path<i64>,
    input: web::Json<ProductInput>,
) -> impl Responder {
    info!("Updating product {}: {:?}", id, input);
    match repo::update_product(db.get_ref(), *id, &input).await {
        Ok(Some(product)) => HttpResponse::Ok().json(product),
        Ok(None) => {
            info!("Attempted to update missing product: {}", id);
            product_not_found()
        }
        Err(e) => {
            error!("Error updating product {}: {:?}", id, e);
            HttpResponse::InternalServerError().body(format!("Error: {:?}", e))
        }
    }
}

#[delete("/products/{id}")]
pub async fn delete_existing_product(db: web::Data<SqlitePool>, id: web::Path<i64>) -> impl Responder {
    match repo::delete_product(db.get_ref(), *id).await {
        Ok(true) => {
            info!("Product deleted: {}", id);
            HttpResponse::Ok().json(json!({ "message": "Product deleted successfully" }))
        }
        Ok(false) => {
            info!("Attempted to delete missing product: {}", id);
            product_not_found()
        }
        Err(e) => {
            error!("Error deleting product {}: {:?}", id, e);
            HttpResponse::InternalServerError().body(format!("Error: {:?}", e))
        }
    }
}
