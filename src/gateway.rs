/*
HTTP front for route queries: `GET /route?source=..&destination=..`.
Decodes the two locations, asks the path finder and renders the answer as JSON.
*/

use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::dijkstra::{shortest_route, Route};
use crate::graph::Graph;

pub const PATH_SEPARATOR: &str = " → ";

#[derive(Debug, Clone, Deserialize)]
pub struct RouteQuery {
    pub source: String,
    pub destination: String,
}

/// Wire form of a `Route`. Both fields are strings: `distance` is either a
/// number or `"unreachable"`, `path` is the arrow-joined list of stops (empty
/// when unreachable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResponse {
    pub distance: String,
    pub path: String,
}

impl From<&Route> for RouteResponse {
    fn from(route: &Route) -> Self {
        Self {
            distance: route.distance.to_string(),
            path: route.render_path(PATH_SEPARATOR),
        }
    }
}

pub fn router(graph: Arc<Graph>) -> Router {
    Router::new()
        .route("/route", get(route_handler))
        .with_state(graph)
}

async fn route_handler(
    State(graph): State<Arc<Graph>>,
    Query(query): Query<RouteQuery>,
) -> Json<RouteResponse> {
    let route = shortest_route(&graph, &query.source, &query.destination);
    info!(
        source = %query.source,
        destination = %query.destination,
        distance = %route.distance,
        "route query"
    );
    Json(RouteResponse::from(&route))
}

/// Serve the gateway on `listener` until Ctrl+C.
pub async fn serve(listener: TcpListener, graph: Arc<Graph>) -> Result<()> {
    info!(addr = %listener.local_addr()?, locations = graph.len(), "route gateway listening");
    axum::serve(listener, router(graph))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("route gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(?err, "failed to install ctrl-c handler");
        std::future::pending::<()>().await;
    }
}
