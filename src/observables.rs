// observables.rs - Measurements taken on the lattice between runs

use crate::energy::energy_per_spin;
use crate::lattice::Lattice;

/// Instantaneous observables of a single lattice configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Observables {
    /// Mean spin, in [-1, 1].
    pub magnetization: f64,
    /// |mean spin|, the ferromagnetic order parameter.
    pub abs_magnetization: f64,
    /// Global energy per site, in [-2, 2].
    pub energy_per_spin: f64,
}

impl Observables {
    /// Measure all observables from the current lattice state.
    pub fn measure(lattice: &Lattice) -> Self {
        let magnetization = lattice.magnetization();
        Observables {
            magnetization,
            abs_magnetization: magnetization.abs(),
            energy_per_spin: energy_per_spin(lattice),
        }
    }
}

/// Time series accumulator for calculating fluctuations.
///
/// Push one sample per measurement interval; the stored series is only
/// needed for the autocorrelation estimate, everything else runs on the
/// running moments.
pub struct TimeSeriesAccumulator {
    samples: Vec<f64>,
    sum: f64,
    sum_sq: f64,
    sum_4th: f64,
}

impl TimeSeriesAccumulator {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
            sum: 0.0,
            sum_sq: 0.0,
            sum_4th: 0.0,
        }
    }

    pub fn push(&mut self, value: f64) {
        self.samples.push(value);
        self.sum += value;
        self.sum_sq += value * value;
        self.sum_4th += value.powi(4);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn mean(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum / self.samples.len() as f64
        }
    }

    pub fn variance(&self) -> f64 {
        if self.samples.len() < 2 {
            return 0.0;
        }
        let n = self.samples.len() as f64;
        (self.sum_sq / n) - (self.sum / n).powi(2)
    }

    pub fn moment4(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.sum_4th / self.samples.len() as f64
        }
    }

    /// U4 = 1 - <m^4> / (3 <m^2>^2). 2/3 in a two-state ordered phase,
    /// 0 for Gaussian fluctuations.
    pub fn binder_cumulant(&self) -> f64 {
        let m2 = self.variance() + self.mean().powi(2);
        let m4 = self.moment4();
        if m2 > 0.0 {
            1.0 - m4 / (3.0 * m2 * m2)
        } else {
            0.0
        }
    }

    /// chi = N Var(m) / T for a per-spin magnetization series.
    pub fn susceptibility(&self, n_spins: usize, temperature: f64) -> f64 {
        n_spins as f64 * self.variance() / temperature
    }

    /// C = N Var(e) / T^2 for a per-spin energy series.
    pub fn specific_heat(&self, n_spins: usize, temperature: f64) -> f64 {
        n_spins as f64 * self.variance() / (temperature * temperature)
    }

    pub fn autocorrelation_time(&self) -> f64 {
        // Simplified integrated autocorrelation time
        if self.samples.len() < 100 {
            return 1.0;
        }

        let mean = self.mean();
        let var = self.variance();
        if var == 0.0 {
            return 1.0;
        }

        let mut sum = 0.5; // t = 0 contribution
        for t in 1..50.min(self.samples.len() / 4) {
            let mut c_t = 0.0;
            for i in 0..self.samples.len() - t {
                c_t += (self.samples[i] - mean) * (self.samples[i + t] - mean);
            }
            c_t /= (self.samples.len() - t) as f64 * var;

            if c_t < 0.1 {
                break; // Cutoff when correlation becomes small
            }
            sum += c_t;
        }

        2.0 * sum
    }
}

impl Default for TimeSeriesAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
