use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use folio::config::Config;
use folio::email::SmtpMailer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(&config.log_level)
        }))
        .init();

    tracing::info!("Starting folio");

    let mailer = SmtpMailer::new(&config.smtp, Duration::from_secs(config.mail_timeout_secs))?;
    tracing::info!(
        host = %config.smtp.host,
        port = config.smtp.port,
        "SMTP transport configured"
    );

    let addr = SocketAddr::new(config.host, config.port);
    let rate_window = Duration::from_secs(config.rate_window_secs);
    let (app, state) = folio::build_app(config, Arc::new(mailer));

    // Limiter entries older than one window carry no information.
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(rate_window.max(Duration::from_secs(60)));
        loop {
            interval.tick().await;
            state.submission_limiter.cleanup(rate_window);
        }
    });

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
