//! Serving a router until the process is asked to stop.

use std::future::Future;
use std::io;
use std::time::Duration;

use axum::Router;
use core_config::server::ServerConfig;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};

/// Binds the configured address and serves `router` until Ctrl+C or SIGTERM.
///
/// `cleanup` runs after in-flight requests drain and is abandoned once
/// `server.shutdown_timeout` elapses.
pub async fn serve<C>(router: Router, server: &ServerConfig, cleanup: C) -> io::Result<()>
where
    C: Future<Output = ()> + Send,
{
    let listener = TcpListener::bind(server.address()).await?;
    serve_on(listener, router, shutdown_signal(), cleanup, server.shutdown_timeout).await
}

/// Serves on an already bound listener until `stop` completes.
pub async fn serve_on<S, C>(
    listener: TcpListener,
    router: Router,
    stop: S,
    cleanup: C,
    cleanup_timeout: Duration,
) -> io::Result<()>
where
    S: Future<Output = ()> + Send + 'static,
    C: Future<Output = ()> + Send,
{
    info!(address = %listener.local_addr()?, "Server listening");

    let served = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(stop)
        .await
        .inspect_err(|e| error!("Server encountered an error: {:?}", e));

    run_cleanup(cleanup, cleanup_timeout).await;
    served
}

/// Returns `false` when `cleanup` did not finish within `timeout`.
pub async fn run_cleanup<C>(cleanup: C, timeout: Duration) -> bool
where
    C: Future<Output = ()>,
{
    info!(?timeout, "Running shutdown cleanup");
    match tokio::time::timeout(timeout, cleanup).await {
        Ok(()) => {
            info!("Shutdown cleanup finished");
            true
        }
        Err(_) => {
            warn!(?timeout, "Shutdown cleanup timed out, abandoning it");
            false
        }
    }
}

/// Completes on Ctrl+C or SIGTERM. A handler that cannot be installed never fires.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => "Ctrl+C",
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                "SIGTERM"
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&str>();

    let received = tokio::select! {
        name = ctrl_c => name,
        name = terminate => name,
    };
    info!(signal = received, "Shutting down gracefully");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_cleanup_runs_after_stop() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let router = Router::new().route("/", get(|| async { "ok" }));
        let cleaned = Arc::new(AtomicBool::new(false));
        let flag = cleaned.clone();

        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let server = tokio::spawn(serve_on(
            listener,
            router,
            async move {
                let _ = stop_rx.await;
            },
            async move { flag.store(true, Ordering::SeqCst) },
            Duration::from_secs(1),
        ));

        stop_tx.send(()).unwrap();
        server.await.unwrap().unwrap();
        assert!(cleaned.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_cleanup_is_abandoned_after_timeout() {
        let finished = run_cleanup(std::future::pending(), Duration::from_millis(20)).await;
        assert!(!finished);
    }

    #[tokio::test]
    async fn test_cleanup_within_timeout_reports_success() {
        assert!(run_cleanup(async {}, Duration::from_millis(50)).await);
    }
}
