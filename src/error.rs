// error.rs - Error conditions reported at the simulation boundary

use thiserror::Error;

/// Everything that can go wrong when setting up or starting a run.
///
/// Validation happens once, before any spin is touched: a failed call
/// leaves the lattice exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IsingError {
    /// Temperature must be finite and strictly positive; the acceptance
    /// probability `exp(-dE/T)` is undefined otherwise.
    #[error("temperature must be finite and > 0, got {0}")]
    InvalidTemperature(f64),

    /// Site coordinates outside the lattice.
    #[error("site ({row}, {col}) is outside a {side}x{side} lattice")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        side: usize,
    },

    /// A caller-supplied spin buffer whose length is not `side * side`.
    #[error("side {side} needs {expected} spins, buffer holds {actual}")]
    DimensionMismatch {
        side: usize,
        expected: usize,
        actual: usize,
    },

    /// A caller-supplied spin outside {+1, -1}.
    #[error("spin value {value} at flat index {index} is not +1 or -1")]
    InvalidSpin { index: usize, value: i8 },
}
