use russell_lab::math::PI;
use serde::{Deserialize, Serialize};

/// Holds an input motion for site-response analyses
///
/// Motions are created by the caller and never mutated by the analyses; scaled copies are
/// produced with [Motion::scaled].
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub enum Motion {
    /// Acceleration time series with a constant time step
    TimeSeries {
        label: String,
        accels: Vec<f64>,
        time_step: f64,
    },

    /// Frequencies (Hz) at which transfer functions are evaluated
    Frequencies { freqs: Vec<f64> },
}

impl Motion {
    /// Returns the frequencies (Hz) of the motion
    ///
    /// For time series, these are the non-negative frequencies of the discrete Fourier
    /// transform: `k / (n Δt)` for `k = 0, …, n/2`.
    pub fn freqs(&self) -> Vec<f64> {
        match self {
            Motion::TimeSeries { accels, time_step, .. } => {
                let n = accels.len();
                if n == 0 {
                    return Vec::new();
                }
                let df = 1.0 / ((n as f64) * time_step);
                (0..=n / 2).map(|k| (k as f64) * df).collect()
            }
            Motion::Frequencies { freqs } => freqs.clone(),
        }
    }

    /// Returns the angular frequencies (rad/s) of the motion
    pub fn angular_freqs(&self) -> Vec<f64> {
        self.freqs().iter().map(|f| 2.0 * PI * f).collect()
    }

    /// Returns a copy with the accelerations multiplied by a factor
    ///
    /// Frequency-only motions are returned unchanged.
    pub fn scaled(&self, factor: f64) -> Self {
        match self {
            Motion::TimeSeries {
                label,
                accels,
                time_step,
            } => Motion::TimeSeries {
                label: label.clone(),
                accels: accels.iter().map(|a| a * factor).collect(),
                time_step: *time_step,
            },
            Motion::Frequencies { .. } => self.clone(),
        }
    }

    /// Returns the peak ground acceleration (absolute value); zero for frequency-only motions
    pub fn pga(&self) -> f64 {
        match self {
            Motion::TimeSeries { accels, .. } => accels.iter().fold(0.0, |acc, a| f64::max(acc, f64::abs(*a))),
            Motion::Frequencies { .. } => 0.0,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
