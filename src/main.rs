//! Entry point for the `outgoing` redirect gateway.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use outgoing::config::{load_config, Overrides, SecretKey};
use outgoing::http::HttpServer;
use outgoing::lifecycle::{signals, startup, Shutdown};
use outgoing::observability::logging;

#[derive(Parser)]
#[command(name = "outgoing", version, about = "Redirects to destinations signed with a shared secret")]
struct Cli {
    /// The secret key.
    #[arg(short, long, env = "OUTGOING_SECRET_KEY", hide_env_values = true)]
    key: Option<String>,

    /// Where to bind, e.g. `:8000` or `127.0.0.1:8000`.
    #[arg(short, long, env = "OUTGOING_ADDR")]
    addr: Option<String>,

    /// Log rejected destinations and signatures.
    #[arg(long)]
    debug: bool,

    /// Optional TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match load_config(Overrides {
        config_path: cli.config,
        secret_key: cli.key.map(SecretKey::new),
        bind_address: cli.addr,
        debug: cli.debug,
    }) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("outgoing: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        debug = config.observability.debug,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let version = startup::load_version(&config.version)?;
    startup::start_metrics(&config.observability);

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::forward_signals(shutdown));

    HttpServer::new(config, version)
        .run(listener, server_shutdown)
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
