//! HTTP server setup and routing.

use anyhow::Result;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    response::{Html, IntoResponse},
    routing::{get, post},
    Extension, Router,
};
use cinegraph_core::config::ServerSettings;
use tracing::info;

use crate::schema::MovieSchema;

/// Path the schema is mounted at.
pub const GRAPHQL_PATH: &str = "/graphql";

async fn graphql_handler(
    Extension(schema): Extension<MovieSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Build the router: `POST /graphql` executes documents, `GET /graphql`
/// serves GraphiQL when enabled.
pub fn router(schema: MovieSchema, graphiql_enabled: bool) -> Router {
    let route = if graphiql_enabled {
        get(graphiql).post(graphql_handler)
    } else {
        post(graphql_handler)
    };

    Router::new()
        .route(GRAPHQL_PATH, route)
        .layer(Extension(schema))
}

/// Run the GraphQL server until the process is stopped.
pub async fn run(schema: MovieSchema, settings: &ServerSettings) -> Result<()> {
    let app = router(schema, settings.graphiql);

    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        addr = %addr,
        path = GRAPHQL_PATH,
        graphiql = settings.graphiql,
        "GraphQL server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
