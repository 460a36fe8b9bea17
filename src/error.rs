use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    #[error("value {0} not found")]
    NotFound(i32),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChurnError {
    #[error("live value set is empty, nothing to perturb")]
    EmptyPopulation,

    /// Every candidate below `bound` was rejected as already live.
    #[error("no unused value below {bound} found after {attempts} draws")]
    ValueSpaceExhausted { bound: i32, attempts: usize },

    #[error(transparent)]
    Tree(#[from] TreeError),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("could not write snapshot to {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
