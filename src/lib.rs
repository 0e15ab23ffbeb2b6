pub mod db;
pub mod handlers;
pub mod models;
pub mod repo;

use actix_web::web;

/// Registers the product routes and the 422 JSON error handling. The caller
/// supplies the pool as `web::Data<SqlitePool>` so the binary and the test
/// harness build identical apps.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(handlers::json_config())
        .service(handlers::list_products)
        .service(handlers::get_product_by_id)
        .service(handlers::create_new_product)
        .service(handlers::update_existing_product)
        .service(handlers::delete_existing_product);
}
