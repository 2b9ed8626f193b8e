//! Graceful shutdown.
//!
//! Actix's own signal handling is disabled so liveness can be failed before
//! the server stops accepting connections and drains in-flight requests.

use std::future::Future;
use std::io;

use actix_web::dev::ServerHandle;
use actix_web::web;
use tokio::signal;
use tracing::{error, info};

use user_registration::inbound::http::health::HealthState;

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
pub(super) async fn shutdown_signal() -> io::Result<()> {
    tokio::select! {
        result = signal::ctrl_c() => result,
        result = sigterm() => result,
    }
}

#[cfg(unix)]
async fn sigterm() -> io::Result<()> {
    let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())?;
    terminate.recv().await;
    Ok(())
}

#[cfg(not(unix))]
async fn sigterm() -> io::Result<()> {
    std::future::pending().await
}

/// Waits for `signal`, then fails liveness and stops the server gracefully.
///
/// If the signal cannot be awaited the server keeps running.
pub(super) async fn drain_on<F>(
    signal: F,
    health_state: web::Data<HealthState>,
    handle: ServerHandle,
) where
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = signal.await {
        error!(error = %e, "failed to listen for shutdown signals");
        return;
    }

    health_state.mark_unhealthy();
    info!("shutdown signal received, draining connections");
    handle.stop(true).await;
    info!("server stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpServer};
    use rstest::rstest;
    use tokio::task::JoinHandle;

    fn spawn_server() -> (ServerHandle, JoinHandle<io::Result<()>>) {
        let server = HttpServer::new(App::new)
            .disable_signals()
            .workers(1)
            .bind(("127.0.0.1", 0))
            .expect("bind ephemeral port")
            .run();
        let handle = server.handle();
        (handle, actix_web::rt::spawn(server))
    }

    #[rstest]
    #[actix_web::test]
    async fn signal_fails_liveness_and_stops_server() {
        let health_state = web::Data::new(HealthState::new());
        health_state.mark_ready();
        let (handle, running) = spawn_server();

        drain_on(std::future::ready(Ok(())), health_state.clone(), handle).await;

        assert!(!health_state.is_alive());
        running
            .await
            .expect("server task joins")
            .expect("server exits cleanly");
    }

    #[rstest]
    #[actix_web::test]
    async fn signal_listener_failure_keeps_serving() {
        let health_state = web::Data::new(HealthState::new());
        let (handle, running) = spawn_server();

        drain_on(
            std::future::ready(Err(io::Error::other("no signal handler"))),
            health_state.clone(),
            handle.clone(),
        )
        .await;

        assert!(health_state.is_alive());
        assert!(!running.is_finished());
        handle.stop(false).await;
    }
}
