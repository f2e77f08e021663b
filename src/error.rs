use thiserror::Error;

/// Faults surfaced by the evidence engine and its command line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {

    /// Malformed command line: non-numeric, non-positive or extra arguments.
    #[error("Usage: gausspool [num_datasets]")]
    Usage,

    /// A precision value with no valid standard deviation. Under a
    /// continuous Gamma prior this is a probability-zero event, but a
    /// floating-point draw can still collapse to zero.
    #[error("degenerate precision {0}: stddev = 1/sqrt(precision) requires precision > 0")]
    DegeneratePrecision(f64),

    /// Rejected prior hyperparameters (shapes and scales must be positive).
    #[error("invalid prior hyperparameters")]
    InvalidHyperparameters,

}
