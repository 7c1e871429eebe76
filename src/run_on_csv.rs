use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use csv::{ReaderBuilder, Trim, Writer};
use routeplanner::cli::CommonArgs;
use routeplanner::dijkstra::{shortest_route, Route};
use routeplanner::gateway::PATH_SEPARATOR;
use serde::Deserialize;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "routeplanner-batch")]
#[command(
    about = "Answer every (source, destination) row of a CSV against the graph.",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// CSV with a `source,destination` header, one query per row
    #[arg(short, long)]
    queries: PathBuf,

    /// Output CSV (source, destination, distance, path). If omitted, prints a summary to stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
struct QueryRecord {
    source: String,
    destination: String,
}

fn read_queries<R: io::Read>(reader: R) -> csv::Result<Vec<QueryRecord>> {
    // Trimmed the same way the dataset loader trims location names.
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    rdr.deserialize::<QueryRecord>().collect()
}

fn write_routes<W: io::Write>(
    writer: W,
    queries: &[QueryRecord],
    routes: &[Route],
) -> csv::Result<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(["source", "destination", "distance", "path"])?;
    for (query, route) in queries.iter().zip(routes) {
        wtr.write_record([
            query.source.as_str(),
            query.destination.as_str(),
            route.distance.to_string().as_str(),
            route.render_path(PATH_SEPARATOR).as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.common.init_logging()?;

    let graph = cli.common.load_graph()?;
    let file = File::open(&cli.queries)
        .with_context(|| format!("opening {}", cli.queries.display()))?;
    let queries =
        read_queries(file).with_context(|| format!("reading {}", cli.queries.display()))?;
    info!(queries = queries.len(), "answering queries");

    let now = Instant::now();
    let routes: Vec<_> = queries
        .iter()
        .map(|q| shortest_route(&graph, &q.source, &q.destination))
        .collect();
    let elapsed_millis = now.elapsed().as_secs_f64() * 1000.0;

    let reachable = routes.iter().filter(|r| r.is_reachable()).count();

    if let Some(out_path) = &cli.out {
        let file = File::create(out_path)
            .with_context(|| format!("creating CSV {}", out_path.display()))?;
        write_routes(file, &queries, &routes)
            .with_context(|| format!("writing CSV {}", out_path.display()))?;
        println!("Wrote {} routes to {}", routes.len(), out_path.display());
    }

    println!("Queries: {}", routes.len());
    println!("Reachable: {}", reachable);
    if let Some(longest) = routes.iter().filter_map(|r| r.distance.finite()).max() {
        println!("Longest finite route: {}", longest);
    }
    println!("{:.3} ms", elapsed_millis);

    Ok(())
}
