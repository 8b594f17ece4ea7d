use crew_server::{Config, Server, ServerState, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env, logging)
    dotenv::dotenv().ok();
    init_logger();

    tracing::info!("CrewDesk server starting...");

    // 2. Load configuration
    let config = Config::from_env();
    tracing::info!(
        environment = %config.environment,
        timezone = %config.timezone,
        "Configuration loaded"
    );

    // 3. Initialize state (database + migrations)
    let state = ServerState::initialize(&config).await?;

    // 4. Run the HTTP server until shutdown
    let server = Server::with_state(config, state);
    server.run().await?;

    Ok(())
}
