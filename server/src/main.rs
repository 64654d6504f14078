mod config;
mod error;
mod routes;

use config::ServerConfig;
use error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();
    config::load_dotenv();

    let config = ServerConfig::from_env()?;
    let app = routes::app()?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(port = config.port, env = ?config.env, "daily-tasks listening");
    axum::serve(listener, app).await?;
    Ok(())
}
