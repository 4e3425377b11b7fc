pub mod embed;
pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Build the axum Router with all routes and middleware.
/// Used by `serve_on()` and available for integration testing.
pub fn build_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(embed::index))
        .route("/static/{*path}", get(embed::static_handler))
        .route("/health", get(routes::health::health))
        // Activities
        .route("/activities", get(routes::activities::list_activities))
        .route(
            "/activities/{name}/signup",
            post(routes::activities::signup),
        )
        .route(
            "/activities/{name}/remove",
            delete(routes::activities::withdraw),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// Serve the roster on a pre-bound listener until `shutdown` resolves.
///
/// Taking a bound `TcpListener` lets the caller read the actual port before
/// starting (useful when `port = 0` and the OS picks a free port).
pub async fn serve_on<F>(
    listener: tokio::net::TcpListener,
    app_state: AppState,
    open_browser: bool,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let actual_port = listener.local_addr()?.port();
    let app = build_router(app_state);

    let url = format!("http://localhost:{actual_port}");
    tracing::info!("roster server listening on {url}");

    if open_browser {
        if let Err(e) = open::that(&url) {
            tracing::warn!("could not open browser: {e}");
        }
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    tracing::info!("roster server stopped");
    Ok(())
}
