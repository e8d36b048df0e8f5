//! HTTP transport for the GraphQL schema

use async_graphql::http::GraphiQLSource;
use axum::{response::Html, routing::get, Json, Router};
use tokio::net::TcpListener;
use tracing::info;

use crate::graphql::PhonebookSchema;

/// `POST /graphql` executes documents, `GET /graphql` serves GraphiQL,
/// `GET /health` answers `OK`.
pub fn router(schema: PhonebookSchema) -> Router {
    let graphql_handler = move |Json(request): Json<async_graphql::Request>| {
        let schema = schema.clone();
        async move { Json(schema.execute(request).await) }
    };

    let graphiql_handler = || async { Html(GraphiQLSource::build().endpoint("/graphql").finish()) };

    let health_handler = || async { "OK" };

    Router::new()
        .route("/graphql", axum::routing::post(graphql_handler).get(graphiql_handler))
        .route("/health", get(health_handler))
}

/// Serve until the listener fails
pub async fn serve(listener: TcpListener, schema: PhonebookSchema) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "GraphQL server listening");
    }
    axum::serve(listener, router(schema)).await
}
