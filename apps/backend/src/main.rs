use actix_web::{web, App, HttpServer};
use tracing::info;
use tutti_backend::config::{GameConfig, ServerConfig};
use tutti_backend::middleware::cors::cors_middleware;
use tutti_backend::middleware::structured_logger::StructuredLogger;
use tutti_backend::routes;
use tutti_backend::state::app_state::AppState;
use tutti_backend::telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment.
    let server = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };
    let game = match GameConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    println!(
        "🚀 Starting Tutti Frutti backend on http://{}:{}",
        server.host, server.port
    );
    info!(
        max_rounds = game.max_rounds,
        letter_tick_ms = game.letter_tick.as_millis() as u64,
        columns = game.default_columns.len(),
        "Game configuration loaded"
    );

    // The hub lives on the main system; workers reach it through its address.
    let app_state = AppState::start(game);
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
