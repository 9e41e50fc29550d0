mod check;
mod cli;
mod cmd;
mod config;
mod fs;
mod shared;

use eyre::Result;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_timer(ChronoLocal::new(String::from("%H:%M:%S")))
        .with_target(false)
        .init();

    if let Err(e) = cli::start().await {
        tracing::error!("{:?}", e);
        std::process::exit(1);
    }

    Ok(())
}
