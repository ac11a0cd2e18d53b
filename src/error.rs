use std::path::PathBuf;
use thiserror::Error;

/// Errors that may rise while converting, parsing or rendering
#[derive(Error, Debug)]
pub enum Error {
    #[error("i/o error: {0}")]
    IoError(#[from] std::io::Error),
    /// Malformed STF table
    #[error("{path}: line {line}: {reason}")]
    Parse {
        path: PathBuf,
        line: u64,
        reason: String,
    },
    #[error("unknown SBF block \"{0}\"")]
    UnknownBlock(String),
    #[error("SBF block {0} is not supported here")]
    UnsupportedBlock(String),
    #[error("conversion program \"{0}\" not found")]
    ConverterNotFound(String),
    #[error("conversion of \"{path}\" failed ({status})")]
    ConversionFailed { path: PathBuf, status: String },
    #[error("conversion did not produce \"{0}\"")]
    MissingConversionOutput(PathBuf),
    #[error("empty dataset")]
    EmptyDataset,
    /// Flat values cannot be reshaped into the (azimuth, zenith) grid
    #[error("cannot reshape {values} values into {azimuths}x{zeniths} grid")]
    ShapeMismatch {
        values: usize,
        azimuths: usize,
        zeniths: usize,
    },
    #[error("degenerate polar grid")]
    DegenerateGrid,
}
