use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use log::info;
use products_api::db;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://products.db".to_string());
    let pool = db::connect(&database_url)
        .await
        .expect("Failed to open database");

    let db_data = web::Data::new(pool);

    info!("Starting server on 0.0.0.0:8000");
    HttpServer::new(move || {
        App::new()
            .app_data(db_data.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .configure(products_api::configure)
    })
    .bind(("0.0.0.0", 8000))?
    .run()
    .await
}
