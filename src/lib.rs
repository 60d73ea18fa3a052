//! # ladle: Recipe Data API
//!
//! `ladle` is a small HTTP API for recipe data backed by PostgreSQL. It
//! serves four endpoints: fetch a recipe's aggregated detail, list recipes
//! with sorting/filtering/pagination, search recipes by available
//! ingredients, and submit a rating for a recipe. The only write path is the
//! rating insert; everything else is read-only query shaping.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for
//! the HTTP layer and uses PostgreSQL (via sqlx) for persistence.
//!
//! The **API layer** ([`api`]) holds the axum handlers and the serde models
//! that define the response contracts, including a few legacy field-name
//! quirks kept for compatibility with existing consumers.
//!
//! The **database layer** ([`db`]) uses the repository pattern: each entity
//! has a repository struct wrapping a `&mut PgConnection`, so handlers
//! control transaction scope. Database errors are classified into a typed
//! [`db::errors::DbError`] before they reach the API layer; foreign key
//! violations on the rating insert are distinguished by constraint name.
//!
//! Migrations run on startup via [`migrator`]. There are no background
//! services; the entire latency budget is the round trip to the database.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use ladle::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = ladle::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     ladle::telemetry::init_telemetry()?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod openapi;
pub mod telemetry;
pub mod types;

#[cfg(test)]
mod test_utils;

use crate::openapi::ApiDoc;
use axum::{
    Router,
    routing::{get, post},
};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, info, instrument};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub use config::Config;
pub use types::{RatingId, RecipeId, UserId};

/// Application state shared across all request handlers.
///
/// Holds the injected connection pool and configuration; there is no other
/// cross-request state.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
}

/// Get the ladle database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Build the application router with all endpoints and middleware.
#[instrument(skip_all)]
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/", get(api::handlers::root))
        // Trailing slashes are part of the established endpoint paths
        .route("/recipes/", get(api::handlers::recipes::list_recipes))
        .route("/recipes/{id}", get(api::handlers::recipes::get_recipe))
        .route("/recipes/{recipe_id}/rate/", post(api::handlers::ratings::add_rating))
        .route("/findrecipes/", get(api::handlers::recipes::find_recipes))
        .route("/healthz", get(|| async { "OK" }))
        .with_state(state);

    api_routes
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Main application struct that owns all resources and lifecycle.
///
/// 1. **Create**: [`Application::new`] connects the pool and runs migrations
/// 2. **Serve**: [`Application::serve`] binds a TCP port and handles requests
/// 3. **Shutdown**: on the shutdown signal, drains and closes the pool
pub struct Application {
    router: Router,
    config: Config,
    pool: PgPool,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        Self::new_with_pool(config, None).await
    }

    /// Create an application around an existing pool (used by tests, where
    /// `#[sqlx::test]` provides a per-test database).
    pub async fn new_with_pool(config: Config, pool: Option<PgPool>) -> anyhow::Result<Self> {
        let pool = match pool {
            Some(pool) => pool,
            None => {
                PgPoolOptions::new()
                    .max_connections(config.pool.max_connections)
                    .acquire_timeout(Duration::from_secs(config.pool.acquire_timeout_secs))
                    .connect(&config.database.url)
                    .await?
            }
        };

        migrator().run(&pool).await?;

        let router = build_router(AppState {
            db: pool.clone(),
            config: config.clone(),
        });

        Ok(Self { router, config, pool })
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("Recipe API listening on http://{}", bind_addr);

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Closing database connections...");
        self.pool.close().await;

        Ok(())
    }
}
