use crate::error::ScalarGradError;
use crate::value::Value;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Distribution used to draw initial parameter values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform on `[low, high)`; `low == high` always yields `low`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
    /// Every parameter takes this value.
    Constant(f64),
}

impl Default for Init {
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Checks that the distribution parameters are usable.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        match *self {
            Init::Uniform { low, high } => {
                if !(low.is_finite() && high.is_finite()) || low > high {
                    return Err(ScalarGradError::InvalidConfig(format!(
                        "uniform init requires finite low <= high, got [{}, {})",
                        low, high
                    )));
                }
                if !(high - low).is_finite() {
                    return Err(ScalarGradError::InvalidConfig(format!(
                        "uniform init range [{}, {}) is too wide to sample",
                        low, high
                    )));
                }
            }
            Init::Normal { mean, std } => {
                if !mean.is_finite() || !(std.is_finite() && std >= 0.0) {
                    return Err(ScalarGradError::InvalidConfig(format!(
                        "normal init requires finite mean and std >= 0, got mean={} std={}",
                        mean, std
                    )));
                }
            }
            Init::Constant(value) => {
                if !value.is_finite() {
                    return Err(ScalarGradError::InvalidConfig(format!(
                        "constant init must be finite, got {}",
                        value
                    )));
                }
            }
        }
        Ok(())
    }

    /// Draws one number from the distribution.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<f64, ScalarGradError> {
        self.validate()?;
        let sample = match *self {
            Init::Uniform { low, high } if low == high => low,
            Init::Uniform { low, high } => rng.gen_range(low..high),
            Init::Normal { mean, std } => {
                let normal = Normal::new(mean, std)
                    .map_err(|e| ScalarGradError::InvalidConfig(e.to_string()))?;
                normal.sample(rng)
            }
            Init::Constant(value) => value,
        };
        Ok(sample)
    }
}

/// Creates `n` fresh leaf values drawn from `init`.
pub fn init_values<R: Rng>(
    n: usize,
    init: &Init,
    rng: &mut R,
) -> Result<Vec<Value>, ScalarGradError> {
    (0..n)
        .map(|_| init.sample(&mut *rng).map(Value::new))
        .collect()
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
