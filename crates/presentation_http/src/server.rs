//! Serving with a bounded graceful shutdown

use std::{future::Future, future::IntoFuture, io, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, sync::oneshot};
use tracing::{info, warn};

/// Serve `app` until `shutdown` resolves, then drain for at most `drain_timeout`
///
/// Requests still in flight when the drain window closes are dropped.
///
/// # Errors
///
/// Returns the listener's I/O error if serving fails.
pub async fn serve_with_drain_timeout<F>(
    listener: TcpListener,
    app: Router,
    shutdown: F,
    drain_timeout: Duration,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (draining_tx, mut draining_rx) = oneshot::channel::<()>();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            let _ = draining_tx.send(());
        })
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => result,
        Ok(()) = &mut draining_rx => {
            info!("Waiting up to {:?} for connections to close...", drain_timeout);
            match tokio::time::timeout(drain_timeout, &mut server).await {
                Ok(result) => result,
                Err(_) => {
                    warn!(?drain_timeout, "Drain timed out, dropping open connections");
                    Ok(())
                },
            }
        }
    }
}
