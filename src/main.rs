use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lastletter::{config, terminal};

#[actix_rt::main]
async fn main() -> miette::Result<()> {
    // Set up logging on stderr, stdout carries the overlay views
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lastletter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Last-Letter Helper");

    // Load configuration
    let config = config::load_config()?;

    // Run the overlay until stdin closes, /quit arrives or ctrl-c
    tokio::select! {
        result = terminal::run(config) => result,
        _ = signal::ctrl_c() => {
            info!("Received shutdown signal, stopping overlay");
            Ok(())
        }
    }
}
