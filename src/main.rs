//! HTTP server for the travel subsidy engine.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use travel_subsidy::api::{AppState, create_router};
use travel_subsidy::config::ConfigLoader;

/// Serve overseas-travel subsidy calculations over HTTP.
#[derive(Debug, Parser)]
#[command(name = "travel-subsidy-server", version, about)]
struct Args {
    /// Policy directory holding policy.yaml and tiers.yaml. The built-in
    /// standard policy is used when omitted.
    #[arg(long, env = "SUBSIDY_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Address to listen on.
    #[arg(long, env = "SUBSIDY_BIND_ADDR", default_value = "0.0.0.0:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "travel_subsidy=info,travel_subsidy_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = match &args.config_dir {
        Some(dir) => match ConfigLoader::load(dir) {
            Ok(config) => config,
            Err(err) => {
                error!(error = %err, "Failed to load subsidy policy");
                std::process::exit(1);
            }
        },
        None => ConfigLoader::standard(),
    };

    info!(
        policy_code = %config.policy().metadata().code,
        policy_version = %config.policy().metadata().version,
        "Subsidy policy loaded"
    );

    let app = create_router(AppState::new(config));

    let listener = match tokio::net::TcpListener::bind(args.bind).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(error = %err, addr = %args.bind, "Failed to bind listener");
            std::process::exit(1);
        }
    };

    info!(addr = %args.bind, "Travel subsidy server listening");

    if let Err(err) = axum::serve(listener, app).await {
        error!(error = %err, "Server terminated");
        std::process::exit(1);
    }
}
