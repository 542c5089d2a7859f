use anyhow::Result;
use tunnel_resolver::config;
use tunnel_resolver::logging::init_tracing;
use tunnel_resolver::server;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    init_tracing(&config, std::io::stdout)?;
    config.print_summary();

    server::run(config).await
}
