use mrv_evo::server::{config::Config, error::Error, model::app::AppState, startup};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_logger();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let cors = startup::build_cors(&config)?;
    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting server");

    let router = startup::build_router(AppState { db }, cors);
    let listener = TcpListener::bind(config.bind_address).await?;

    startup::serve(listener, router).await
}
