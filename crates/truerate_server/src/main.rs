use anyhow::Result;
use clap::Parser;
use tracing::info;
use truerate_server::{AppState, ServerConfig, router};

#[derive(Parser, Debug)]
#[command(author, version, about = "TrueRate electricity-plan calculator API", long_about = None)]
struct Args {
    /// Address to bind (overrides TRUERATE_BIND_ADDR)
    #[arg(short, long)]
    bind: Option<String>,

    /// Subscription endpoint for captured leads (overrides TRUERATE_SUBSCRIBE_URL)
    #[arg(short, long)]
    subscribe_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(url) = args.subscribe_url {
        config = config.with_subscribe_url(url);
    }

    info!(bind = %config.bind_addr, "starting calculator server");

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let app = router(AppState::new(config));
    axum::serve(listener, app).await?;

    Ok(())
}
