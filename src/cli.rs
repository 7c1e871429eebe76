/*
Flags and start-up plumbing shared by the binaries.
*/

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing_subscriber::EnvFilter;

use crate::dataset;
use crate::graph::Graph;

#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// CSV edge list (from,to,weight). Uses the bundled city network when omitted.
    #[arg(short, long, global = true, env = "ROUTEPLANNER_DATASET")]
    pub dataset: Option<PathBuf>,

    /// Logging verbosity level (`trace`, `debug`, `info`, `warn`, `error`).
    /// `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, default_value = "info")]
    pub verbosity: String,
}

impl CommonArgs {
    pub fn init_logging(&self) -> Result<()> {
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(&self.verbosity)
                .with_context(|| format!("invalid verbosity {:?}", self.verbosity))?,
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        Ok(())
    }

    pub fn load_graph(&self) -> Result<Graph> {
        match &self.dataset {
            Some(path) => {
                dataset::load_csv(path).with_context(|| format!("loading {}", path.display()))
            }
            None => dataset::sample().context("loading bundled dataset"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct Harness {
        #[command(flatten)]
        common: CommonArgs,
    }

    // Both cases live in one test: they share the process-wide environment.
    #[test]
    fn dataset_falls_back_to_env_then_bundled() {
        std::env::remove_var("ROUTEPLANNER_DATASET");
        let args = Harness::try_parse_from(["test"]).unwrap();
        assert_eq!(args.common.verbosity, "info");
        assert_eq!(args.common.dataset, None);
        let graph = args.common.load_graph().unwrap();
        assert!(graph.contains("Delhi"));

        std::env::set_var("ROUTEPLANNER_DATASET", "/from/env/edges.csv");
        let from_env = Harness::try_parse_from(["test"]);
        let from_flag = Harness::try_parse_from(["test", "--dataset", "/from/flag.csv"]);
        std::env::remove_var("ROUTEPLANNER_DATASET");

        assert_eq!(
            from_env.unwrap().common.dataset,
            Some(PathBuf::from("/from/env/edges.csv"))
        );
        assert_eq!(from_flag.unwrap().common.dataset, Some(PathBuf::from("/from/flag.csv")));
    }

    #[test]
    fn missing_dataset_file_is_an_error() {
        let args = Harness::try_parse_from(["test", "--dataset", "/no/such/file.csv"]).unwrap();
        let err = args.common.load_graph().unwrap_err();
        assert!(format!("{:#}", err).contains("/no/such/file.csv"));
    }
}
