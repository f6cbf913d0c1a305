// metropolis.rs - Single-spin-flip Metropolis driver

use crate::energy::energy_change_unchecked;
use crate::error::IsingError;
use crate::lattice::Lattice;
use rand::Rng;

/// Returned by each flip attempt, allows O(1) book-keeping in the caller.
#[derive(Debug, Clone, Copy)]
pub struct StepInfo {
    pub row: usize,
    pub col: usize,
    pub delta_e: f64,
    pub accepted: bool,
}

/// Aggregate counters for one `run_metropolis` call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunStats {
    pub steps: usize,
    pub accepted: usize,
}

impl RunStats {
    pub fn acceptance_rate(&self) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            self.accepted as f64 / self.steps as f64
        }
    }
}

/// Apply the Metropolis acceptance rule at a fixed site.
///
/// Energy-lowering flips are accepted unconditionally; energy-raising (or
/// neutral) flips are accepted when a uniform draw in `[0, 1)` lands
/// strictly below `exp(-dE / temperature)`.
///
/// Preconditions (validated by [`run_metropolis`], not here): the site is
/// in range and the temperature is finite and strictly positive.
pub fn attempt_flip(
    lattice: &mut Lattice,
    row: usize,
    col: usize,
    temperature: f64,
    rng: &mut impl Rng,
) -> StepInfo {
    let delta_e = energy_change_unchecked(lattice, row, col);
    let accepted = if delta_e < 0.0 {
        true
    } else {
        rng.gen::<f64>() < (-delta_e / temperature).exp()
    };
    if accepted {
        lattice.flip(row, col);
    }
    StepInfo {
        row,
        col,
        delta_e,
        accepted,
    }
}

/// One flip attempt at a uniformly random site.
///
/// Site selection, not a sweep: the same site may be drawn many times or
/// never over a run.
pub fn metropolis_step(lattice: &mut Lattice, temperature: f64, rng: &mut impl Rng) -> StepInfo {
    let side = lattice.side();
    let row = rng.gen_range(0..side);
    let col = rng.gen_range(0..side);
    attempt_flip(lattice, row, col, temperature, rng)
}

/// Perform exactly `num_steps` flip attempts, mutating the lattice in place.
///
/// The temperature is validated before the first step; a failed call leaves
/// the lattice untouched. Zero steps is a valid no-op. Inside the loop no
/// further checks run: drawn sites are in range by construction and wrap
/// arithmetic keeps every neighbor access valid.
pub fn run_metropolis(
    lattice: &mut Lattice,
    temperature: f64,
    num_steps: usize,
    rng: &mut impl Rng,
) -> Result<RunStats, IsingError> {
    if !temperature.is_finite() || temperature <= 0.0 {
        return Err(IsingError::InvalidTemperature(temperature));
    }

    let mut stats = RunStats {
        steps: num_steps,
        accepted: 0,
    };
    for _ in 0..num_steps {
        if metropolis_step(lattice, temperature, rng).accepted {
            stats.accepted += 1;
        }
    }
    Ok(stats)
}
