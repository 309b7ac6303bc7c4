mod app;
mod config;
mod handlers;
mod mock_data;
mod models;
mod state;
mod storage;

use clap::Parser;
use listenfd::ListenFd;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{app::create_app, config::Config, state::AppState};

const DEFAULT_LOG_FILTER: &str = "shipboard=debug,tower_http=debug";

/// Shipboard - cruise day planner with iCalendar downloads
#[derive(Parser, Debug)]
#[command(name = "shipboard", version, about, long_about = None)]
struct Cli {
    /// Address the HTTP server binds to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port the HTTP server listens on
    #[arg(long, short, default_value_t = 3000, env = "PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = Config::from_env();
    let state = AppState::from_config(&config).await?;

    tracing::info!(
        start = %state.cruise.start_date(),
        start_day_of_week = state.cruise.start_day_of_week(),
        length_in_days = state.cruise.length_in_days(),
        calendar = %config.calendar_name,
        "Cruise configured"
    );

    let listener = bind_listener(&cli).await?;
    tracing::info!(addr = %listener.local_addr()?, "Shipboard listening");

    axum::serve(listener, create_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shipboard stopped");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Reuses a socket handed over by `systemfd` when present, else binds `host:port`.
async fn bind_listener(cli: &Cli) -> anyhow::Result<TcpListener> {
    if let Some(inherited) = ListenFd::from_env().take_tcp_listener(0)? {
        inherited.set_nonblocking(true)?;
        return Ok(TcpListener::from_std(inherited)?);
    }

    Ok(TcpListener::bind((cli.host.as_str(), cli.port)).await?)
}

/// Resolves once Ctrl+C or SIGTERM arrives.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "Could not listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "Could not listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        _ = interrupt => "SIGINT",
        _ = terminate => "SIGTERM",
    };

    tracing::info!(signal, "Shutting down");
}
