use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::env;
use std::sync::Arc;

use dataserver::dao::{SqliteDepartmentDao, SqliteEmployeeDao};
use dataserver::db;
use dataserver::handlers;
use dataserver::service::{DepartmentService, EmployeeService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://dataserver.db?mode=rwc".to_string());
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    let pool = db::create_pool(&database_url)
        .await
        .expect("Failed to connect to the database");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let dep_service = web::Data::new(DepartmentService::new(Arc::new(SqliteDepartmentDao::new(
        pool.clone(),
    ))));
    let empl_service = web::Data::new(EmployeeService::new(Arc::new(SqliteEmployeeDao::new(
        pool.clone(),
    ))));

    info!("Starting server at {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(dep_service.clone())
            .app_data(empl_service.clone())
            .configure(handlers::routes)
    })
    .bind(bind_addr.as_str())?
    .run()
    .await
}
