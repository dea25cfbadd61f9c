use std::future::{Future, pending};
use std::io;
use tracing::{error, info};

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
pub async fn signal() {
    wait_for(tokio::signal::ctrl_c()).await
}

async fn wait_for<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => {
            error!(error = %err, "failed to listen for shutdown signal");
            pending::<()>().await;
        }
    }
}
