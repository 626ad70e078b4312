use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use market_news::{
    http::{router, AppState},
    news::{
        env::{Environment, ProcessEnv, FINNHUB_API_KEY},
        finnhub::DEFAULT_TIMEOUT,
        CacheStore, FallbackSelector, FinnhubClient, NewsService,
    },
};

#[derive(Parser, Debug)]
#[command(name = "market-news")]
#[command(about = "Caching proxy for Finnhub market news")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    #[arg(short, long, env = "PORT", default_value = "8080")]
    port: u16,

    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Directory served for every path other than the API
    #[arg(long, env = "STATIC_DIR", default_value = "./static")]
    static_dir: PathBuf,

    /// Request timeout towards Finnhub
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    upstream_timeout_secs: u64,

    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let args = Args::parse();

    let filter_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("market_news={filter_level},tower_http=info").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if !dotenv_loaded {
        info!("No .env file found, using environment variables");
    }

    let env: Arc<dyn Environment> = Arc::new(ProcessEnv);
    if env.non_empty(FINNHUB_API_KEY).is_none() {
        warn!("{FINNHUB_API_KEY} not set, live fetches will fail unless sample data applies");
    }

    let source = FinnhubClient::new(
        Arc::clone(&env),
        Duration::from_secs(args.upstream_timeout_secs),
    )
    .context("failed to build upstream HTTP client")?;

    let news = NewsService::new(
        Arc::new(CacheStore::new()),
        FallbackSelector::new(Arc::clone(&env)),
        Arc::new(source),
    );

    let app = router(AppState::new(news), &args.static_dir);

    let bind_addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind to {bind_addr}"))?;

    info!("Market news server started on {}", bind_addr);
    info!("Serving static files from {}", args.static_dir.display());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::try_parse_from([
            "market-news",
            "--port",
            "9000",
            "--static-dir",
            "/srv/www",
            "--debug",
        ])
        .unwrap();

        assert_eq!(args.port, 9000);
        assert_eq!(args.static_dir, PathBuf::from("/srv/www"));
        assert!(args.debug);
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["market-news", "--host", "127.0.0.1"]).unwrap();

        assert_eq!(args.host, "127.0.0.1");
        assert_eq!(args.upstream_timeout_secs, 10);
    }
}
