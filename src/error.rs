use thiserror::Error;

/// Every failure the library can report.
///
/// Shape errors are raised before any arithmetic happens, so a failed call
/// never leaves a half-computed result behind.
#[derive(Debug, Error)]
pub enum NetError {
    /// Two operands of a vector or matrix operation cannot be aligned.
    #[error("dimension mismatch in {op}: expected {expected}, got {actual}")]
    DimensionMismatch {
        op: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The training loop ran out of epochs before the error converged.
    #[error("training did not converge within {epochs} epochs (last error {last_error})")]
    NonTermination { epochs: usize, last_error: f64 },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl NetError {
    pub(crate) fn mismatch(op: &'static str, expected: usize, actual: usize) -> NetError {
        NetError::DimensionMismatch { op, expected, actual }
    }
}

/// Fails with `DimensionMismatch` unless both lengths agree.
pub(crate) fn ensure_same_len(op: &'static str, expected: usize, actual: usize) -> Result<(), NetError> {
    if expected == actual {
        Ok(())
    } else {
        Err(NetError::mismatch(op, expected, actual))
    }
}
