use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use routeplanner::cli::CommonArgs;
use routeplanner::dijkstra::shortest_route;
use routeplanner::gateway::{self, RouteResponse, PATH_SEPARATOR};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "routeplanner")]
#[command(
    version,
    about = "Shortest routes between named locations of a weighted city graph.",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve `GET /route?source=..&destination=..` over HTTP
    Serve {
        /// Address to listen on
        #[arg(short, long, default_value = "0.0.0.0:8000", env = "ROUTEPLANNER_LISTEN")]
        listen: SocketAddr,
    },
    /// Answer a single query and exit
    Route {
        source: String,
        destination: String,

        /// Print the same JSON body the HTTP gateway returns
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.common.init_logging()?;

    let graph = cli.common.load_graph()?;
    info!(locations = graph.len(), edges = graph.edge_count(), "graph loaded");

    match cli.command {
        Command::Serve { listen } => {
            let listener = TcpListener::bind(listen)
                .await
                .with_context(|| format!("binding {}", listen))?;
            gateway::serve(listener, Arc::new(graph)).await?;
        }
        Command::Route {
            source,
            destination,
            json,
        } => {
            let route = shortest_route(&graph, &source, &destination);
            if json {
                println!("{}", serde_json::to_string(&RouteResponse::from(&route))?);
            } else if route.is_reachable() {
                println!("Distance: {}", route.distance);
                println!("Path: {}", route.render_path(PATH_SEPARATOR));
            } else {
                println!("No route from {} to {}", source, destination);
            }
        }
    }

    Ok(())
}
