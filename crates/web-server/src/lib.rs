use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use configuration::settings::Settings;
use database::{DbRepository, ProductRepository};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;
pub mod service;

#[cfg(test)]
mod test_support;

pub use service::ProductService;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductService,
}

impl AppState {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self {
            products: ProductService::new(repo),
        }
    }
}

/// Builds the full router: product routes under `/product` plus the health check.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/product", product_routes())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(1024 * 1024))
}

fn product_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::get_products).post(handlers::create_product))
        // Static segment, so it wins over `/:id` for `/bycat/...`.
        .route("/bycat/:id", get(handlers::get_products_by_category_id))
        .route(
            "/:id",
            get(handlers::get_product_by_id)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
}

/// Connects to the database, serves until SIGINT/SIGTERM, then drains
/// in-flight requests and closes the pool.
pub async fn run_server(settings: Settings) -> anyhow::Result<()> {
    let addr = settings.server.socket_addr()?;

    let db_pool = database::connect(&settings.database).await?;
    if settings.database.run_migrations {
        database::run_migrations(&db_pool).await?;
    }
    let db_repo = DbRepository::new(db_pool.clone());
    let app_state = Arc::new(AppState::new(Arc::new(db_repo)));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server listening on http://{}", addr);

    axum::serve(listener, app(app_state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database::close(db_pool).await;
    tracing::info!("Web server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}
