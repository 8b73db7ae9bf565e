use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("could not read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Config(#[from] dg_core::ConfigError),

    #[error(transparent)]
    Generation(#[from] dg_core::GenError),

    #[error("could not write output: {0}")]
    Output(#[from] serde_json::Error),
}
