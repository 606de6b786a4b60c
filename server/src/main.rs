use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use querydesk_core::Config;

#[derive(Parser, Debug)]
#[command(name = "querydesk-server", about = "Customer query translation service")]
struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    querydesk_server::run(cli.listen, Config::from_env()).await
}
