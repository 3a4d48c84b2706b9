use expense_tracker::{api, config::Config, init};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init();

    let config = Config::from_env();
    tracing::info!("Starting server on {}", config.listen_addr);
    api::serve(config.listen_addr, api::AppState::new()).await
}
