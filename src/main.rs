use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

use qcaas_portal::api::handlers::ProgressBroker;
use qcaas_portal::api::{AppState, configure_routes};
use qcaas_portal::{banner, config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Print the startup banner
    banner::print_banner();

    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  No .env file loaded: {}", e);
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_config = config::AppConfig::from_env()
        .expect("Failed to load app configuration from environment");
    let port = app_config.port;

    println!("🔬 Classification backend: {}", app_config.backend.api_base);

    let state = AppState::new(app_config);
    let broker = ProgressBroker::new();

    println!("🚀 Starting server...");
    println!("📊 Portal available at http://127.0.0.1:{}", port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(broker.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
