//! HTTP transport: GraphQL endpoint, GraphiQL explorer, banner and health routes.

use std::{net::SocketAddr, sync::Arc};

use async_graphql::http::GraphiQLSource;
use axum::{
    extract::State,
    response::Html,
    routing::get,
    Json, Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::{health::health_check, schema::PositionsSchema, signals::shutdown_signal};

#[derive(Clone)]
pub struct AppState {
    schema: PositionsSchema,
    graphql_path: Arc<str>,
}

pub fn build_router(schema: PositionsSchema, graphql_path: &str) -> Router {
    let state = AppState {
        schema,
        graphql_path: Arc::from(graphql_path),
    };

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(banner))
        .route("/health", get(health_check))
        .route(graphql_path, get(graphiql).post(graphql_handler))
        .layer(cors)
        .with_state(state)
}

/// Serves the API on `0.0.0.0:port` until a shutdown signal arrives.
pub async fn serve(
    router: Router,
    port: u16,
    graphql_path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        log::error!("Failed to bind HTTP server to port {}: {:?}", port, e);
        e
    })?;

    log::info!("Server is running on http://localhost:{}", port);
    log::info!(
        "GraphQL endpoint available at http://localhost:{}{}",
        port,
        graphql_path
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn banner(State(state): State<AppState>) -> String {
    format!(
        "AAVE Positions API - Use GraphQL endpoint at {}",
        state.graphql_path
    )
}

async fn graphiql(State(state): State<AppState>) -> Html<String> {
    Html(GraphiQLSource::build().endpoint(&state.graphql_path).finish())
}

async fn graphql_handler(
    State(state): State<AppState>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(state.schema.execute(request).await)
}
