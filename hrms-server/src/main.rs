use hrms_server::{Config, Server, ServerState, init_logger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv) and logging
    let _ = dotenv::dotenv();
    init_logger();

    tracing::info!("HRMS server starting...");

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize server state (fatal on DB/migration failure)
    let state = match ServerState::initialize(&config).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to initialize server state: {e}");
            std::process::exit(1);
        }
    };

    // 4. Run the HTTP server until shutdown
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}
