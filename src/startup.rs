use crate::config::{MongoSettings, Settings};
use crate::error::AppError;
use crate::handlers;
use crate::services::MongoDb;
use axum::{routing::get, Router};
use once_cell::sync::OnceCell;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    db: Arc<OnceCell<MongoDb>>,
}

impl Application {
    pub async fn build(settings: Settings) -> Result<Self, AppError> {
        // Fire-and-forget: the outcome is logged and the handle parked; nothing
        // gates server readiness on it.
        let db: Arc<OnceCell<MongoDb>> = Arc::new(OnceCell::new());
        spawn_database_connect(settings.mongodb.clone(), db.clone());

        let app = Router::new()
            .route("/", get(handlers::root_greeting))
            .route("/api", get(handlers::api_greeting))
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .layer(TraceLayer::new_for_http());

        let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Backend running on port {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            db,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Slot the startup task parks the handle in. No route reads it; kept so
    /// the connection pool stays alive for the lifetime of the process.
    pub fn db_slot(&self) -> Arc<OnceCell<MongoDb>> {
        self.db.clone()
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

fn spawn_database_connect(settings: MongoSettings, slot: Arc<OnceCell<MongoDb>>) {
    tokio::spawn(async move {
        match MongoDb::connect(&settings.uri, &settings.database).await {
            Ok(db) => match db.ping().await {
                Ok(()) => {
                    tracing::info!(database = %settings.database, "Connected to MongoDB");
                    let _ = slot.set(db);
                }
                Err(e) => {
                    tracing::error!("MongoDB connection failed: {}", e);
                }
            },
            Err(e) => {
                tracing::error!("MongoDB connection failed: {}", e);
            }
        }
    });
}
