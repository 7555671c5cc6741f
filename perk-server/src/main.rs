use perk_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment and configuration (fails fast when DATABASE_URL is absent)
    dotenv::dotenv().ok();
    let config = Config::from_env()?;

    // 2. Logging
    init_logger_with_file(None, config.log_dir.as_deref());

    tracing::info!("Perk server starting...");

    // 3. Initialize server state (connects to the database).
    // A connection failure is logged by the connector and re-raised here;
    // returning the error is what terminates the process.
    let state = ServerState::initialize(&config).await?;

    // 4. Run the HTTP server
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
