// src/api/routes.rs
use actix_web::web;

use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::home))
        .route("/experiment", web::get().to(handlers::experiment_page))
        .route("/result", web::get().to(handlers::result_page))
        .route("/ws/progress", web::get().to(handlers::progress_feed))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(handlers::health_check))
                .route("/experiment/run", web::post().to(handlers::run_experiment)),
        )
        // Stays last so the page and API routes win first.
        .route("/{_:.*}", web::get().to(handlers::static_file_handler));
}
