/*
Edge-list datasets.

A dataset is a CSV file with a `from,to,weight` header, one directed edge per row.
Lines starting with `#` are ignored and fields are trimmed. Reverse edges are
derived once, after every row is in (see `GraphBuilder::symmetrize`).
*/

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::graph::{Graph, GraphBuilder, Location, Weight};

const SAMPLE: &str = include_str!("../data/india.csv");

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("opening dataset {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("reading dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset declares no edges")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    from: Location,
    to: Location,
    weight: Weight,
}

/// The bundled city network.
pub fn sample() -> Result<Graph, DatasetError> {
    from_reader(SAMPLE.as_bytes())
}

pub fn load_csv(path: impl AsRef<Path>) -> Result<Graph, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DatasetError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "loading dataset");
    from_reader(file)
}

pub fn from_reader<R: io::Read>(reader: R) -> Result<Graph, DatasetError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut builder = GraphBuilder::new();
    let mut rows = 0usize;
    for result in rdr.deserialize::<EdgeRecord>() {
        let EdgeRecord { from, to, weight } = result?;
        rows += 1;
        if let Some(previous) = builder.weight(&from, &to) {
            warn!(%from, %to, previous, weight, "edge declared twice, keeping the later weight");
        }
        builder.add_edge(from, to, weight);
    }

    if rows == 0 {
        return Err(DatasetError::Empty);
    }

    let declared = builder.edge_count();
    let graph = builder.symmetrize();
    info!(
        rows,
        declared,
        derived = graph.edge_count() - declared,
        locations = graph.len(),
        "dataset ready"
    );
    Ok(graph)
}
