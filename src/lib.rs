pub mod energy;
pub mod error;
pub mod error_analysis;
pub mod lattice;
pub mod metropolis;
pub mod observables;

pub use energy::{energy_change, energy_per_spin, total_energy};
pub use error::IsingError;
pub use error_analysis::{ErrorAnalysis, ErrorEstimates};
pub use lattice::Lattice;
pub use metropolis::{attempt_flip, metropolis_step, run_metropolis, RunStats, StepInfo};
pub use observables::{Observables, TimeSeriesAccumulator};
