// error_analysis.rs - Error analysis for Monte Carlo time series

/// Error analysis for a single observable's time series.
pub struct ErrorAnalysis {
    /// Raw time series data
    data: Vec<f64>,
    /// Integrated autocorrelation time
    tau_int: f64,
    /// Effective sample size
    n_eff: f64,
    /// Statistical error (from autocorrelation)
    stat_error: f64,
    /// Jackknife error estimate
    jack_error: f64,
}

impl ErrorAnalysis {
    /// Create error analysis from time series data.
    pub fn new(data: Vec<f64>) -> Self {
        let n = data.len() as f64;

        let tau_int = Self::integrated_autocorr_time(&data);

        // Effective sample size
        let n_eff = n / (2.0 * tau_int);

        // Statistical error accounting for autocorrelation
        let mean = data.iter().sum::<f64>() / n;
        let variance = data.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
        let stat_error = (variance / n_eff).sqrt();

        let jack_error = Self::jackknife_error(&data, |x| x.iter().sum::<f64>() / x.len() as f64);

        Self {
            data,
            tau_int,
            n_eff,
            stat_error,
            jack_error,
        }
    }

    /// Integrated autocorrelation time using automatic windowing.
    fn integrated_autocorr_time(data: &[f64]) -> f64 {
        let n = data.len();
        if n < 10 {
            return 0.5; // Minimal correlation for very short series
        }

        let mean = data.iter().sum::<f64>() / n as f64;

        let c0 = data.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / n as f64;
        if c0 == 0.0 {
            return 0.5; // No variance, no correlation
        }

        // Automatic windowing (Sokal 1989)
        let mut tau_sum = 0.5; // C(0) contributes 0.5

        for t in 1..n.min(n / 4) {
            let mut ct = 0.0;
            for i in 0..n - t {
                ct += (data[i] - mean) * (data[i + t] - mean);
            }
            ct /= (n - t) as f64;

            let rho_t = ct / c0;
            tau_sum += rho_t;

            // Automatic windowing condition
            if t >= (6.0 * tau_sum) as usize {
                break;
            }

            // Stop if correlation becomes negligible
            if rho_t.abs() < 0.05 && t > 10 {
                break;
            }
        }

        tau_sum.max(0.5)
    }

    /// Jackknife error for a given estimator function.
    fn jackknife_error<F>(data: &[f64], estimator: F) -> f64
    where
        F: Fn(&[f64]) -> f64,
    {
        let n = data.len();
        if n < 2 {
            return 0.0;
        }

        let mut jack_estimates = Vec::with_capacity(n);
        let mut subsample = Vec::with_capacity(n - 1);

        for i in 0..n {
            subsample.clear();
            for (j, &val) in data.iter().enumerate() {
                if i != j {
                    subsample.push(val);
                }
            }
            jack_estimates.push(estimator(&subsample));
        }

        // Jackknife variance
        let jack_mean = jack_estimates.iter().sum::<f64>() / n as f64;
        let jack_var = jack_estimates
            .iter()
            .map(|&x| (x - jack_mean).powi(2))
            .sum::<f64>()
            * (n - 1) as f64
            / n as f64;

        jack_var.sqrt()
    }

    /// Get all error estimates
    pub fn errors(&self) -> ErrorEstimates {
        ErrorEstimates {
            tau_int: self.tau_int,
            n_eff: self.n_eff,
            stat_error: self.stat_error,
            jack_error: self.jack_error,
            relative_error: self.stat_error / self.mean().abs(),
        }
    }

    /// Mean of the data
    pub fn mean(&self) -> f64 {
        self.data.iter().sum::<f64>() / self.data.len() as f64
    }

    /// Variance of the data
    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        self.data.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / (self.data.len() - 1) as f64
    }
}

/// Container for different error estimates
#[derive(Debug, Clone, Copy)]
pub struct ErrorEstimates {
    pub tau_int: f64,
    pub n_eff: f64,
    pub stat_error: f64,
    pub jack_error: f64,
    pub relative_error: f64,
}
