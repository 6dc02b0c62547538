//! HTTP server lifecycle: start listening, stop gracefully.

use std::io;
use std::net::SocketAddr;

use actix_web::dev::ServerHandle;
use actix_web::rt::task::JoinHandle;
use actix_web::{App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::config::AppConfig;
use crate::configure_app;
use crate::observability::RequestIdMiddleware;
use crate::state::AppState;

/// Startup and shutdown failures.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("HTTP server I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database initialization failed: {0}")]
    Database(String),
}

/// A started server. Dropping it leaves the server running; call
/// [`RunningServer::close`] or [`RunningServer::wait`].
pub struct RunningServer {
    addr: SocketAddr,
    handle: ServerHandle,
    task: JoinHandle<io::Result<()>>,
    state: AppState,
}

/// Open the configured store, bind and start serving.
pub async fn run_server(config: &AppConfig) -> Result<RunningServer, ServerError> {
    let state = AppState::new(config.database.as_ref()).await?;
    start(config, state)
}

/// Stop a server started with [`run_server`].
pub async fn close_server(server: RunningServer) -> Result<(), ServerError> {
    server.close().await
}

/// Bind and start serving with an already built state.
pub fn start(config: &AppConfig, state: AppState) -> Result<RunningServer, ServerError> {
    let app_state = state.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .configure(configure_app(app_state.clone()))
    })
    .bind((config.host.as_str(), config.port))?;

    let addr = server.addrs().first().copied().ok_or_else(|| {
        io::Error::new(io::ErrorKind::AddrNotAvailable, "no listener address bound")
    })?;

    let server = server.run();
    let handle = server.handle();
    let task = actix_web::rt::spawn(server);

    tracing::info!(%addr, "Blog API listening");

    Ok(RunningServer {
        addr,
        handle,
        task,
        state,
    })
}

impl RunningServer {
    /// Address the listener is bound to (resolves port `0`).
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Graceful stop: in-flight requests finish, then the store is closed.
    pub async fn close(self) -> Result<(), ServerError> {
        tracing::info!(addr = %self.addr, "Stopping Blog API");
        self.handle.stop(true).await;
        self.finish().await
    }

    /// Serve until the server stops on its own (shutdown signal).
    pub async fn wait(self) -> Result<(), ServerError> {
        self.finish().await
    }

    async fn finish(self) -> Result<(), ServerError> {
        let RunningServer { task, state, .. } = self;

        task.await.map_err(io::Error::other)??;
        state.shutdown().await;

        tracing::info!("Blog API stopped");
        Ok(())
    }
}
