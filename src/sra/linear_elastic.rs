use super::{LinearCalculator, Motion};
use crate::base::{At, EngineError, Location, Wave};
use crate::profile::Profile;
use crate::Error;
use russell_lab::Complex64;

/// Implements a linear visco-elastic calculator for vertically propagating shear waves
///
/// The amplitudes of the upgoing (A) and downgoing (B) waves at the top of each slice are
/// computed by the recursion of Ref #1 with complex shear moduli:
///
/// ```text
/// G* = G (1 - 2ξ² + 2iξ√(1 - ξ²))     vs* = √(G*/ρ)     k* = ω / vs*
///
/// α = ρₘ vs*ₘ / (ρₘ₊₁ vs*ₘ₊₁)
///
/// Aₘ₊₁ = ½ [Aₘ (1 + α) exp(ik*ₘhₘ) + Bₘ (1 - α) exp(-ik*ₘhₘ)]
/// Bₘ₊₁ = ½ [Aₘ (1 - α) exp(ik*ₘhₘ) + Bₘ (1 + α) exp(-ik*ₘhₘ)]
/// ```
///
/// with `A₀ = B₀ = 1` at the free surface. The last slice acts as the half-space.
///
/// # Reference
///
/// 1. Kramer SL (1996) Geotechnical Earthquake Engineering, Prentice Hall, 653p
pub struct LinearElasticCalculator;

impl LinearElasticCalculator {
    /// Allocates a new instance
    pub fn new() -> Self {
        LinearElasticCalculator
    }

    /// Calculates the wave amplitudes (A, B) at the top of each slice for an angular frequency
    pub fn wave_amplitudes(&self, profile: &Profile, omega: f64) -> Result<Vec<(Complex64, Complex64)>, Error> {
        let n = profile.n_slices();
        if n == 0 {
            return Err(EngineError::new("profile has no slices").into());
        }
        let mut vs_star = Vec::with_capacity(n);
        for (i, slice) in profile.slices.iter().enumerate() {
            if !(slice.density > 0.0) || !(slice.g_mod > 0.0) {
                return Err(EngineError::new(format!("slice {} has non-positive density or modulus", i)).into());
            }
            let xi = slice.damping;
            let g_star = slice.g_mod * Complex64::new(1.0 - 2.0 * xi * xi, 2.0 * xi * f64::sqrt(1.0 - xi * xi));
            vs_star.push((g_star / slice.density).sqrt());
        }
        let one = Complex64::new(1.0, 0.0);
        let mut amplitudes = Vec::with_capacity(n);
        amplitudes.push((one, one));
        for m in 0..(n - 1) {
            let (a, b) = amplitudes[m];
            let this = &profile.slices[m];
            let next = &profile.slices[m + 1];
            let alpha = (this.density * vs_star[m]) / (next.density * vs_star[m + 1]);
            let ikh = Complex64::new(0.0, 1.0) * (omega / vs_star[m]) * this.thickness;
            let up = ikh.exp();
            let down = (-ikh).exp();
            let a_next = 0.5 * (a * (one + alpha) * up + b * (one - alpha) * down);
            let b_next = 0.5 * (a * (one - alpha) * up + b * (one + alpha) * down);
            amplitudes.push((a_next, b_next));
        }
        Ok(amplitudes)
    }

    /// Returns the wave value at a location given the amplitudes at the top of each slice
    fn wave_at(
        &self,
        profile: &Profile,
        amplitudes: &[(Complex64, Complex64)],
        omega: f64,
        location: &Location,
    ) -> Result<Complex64, Error> {
        let index = profile.index_of(location.at)?;
        let (mut a, mut b) = amplitudes[index];
        if let At::Depth(depth) = location.at {
            let slice = &profile.slices[index];
            let z = depth - slice.depth;
            if z > 0.0 {
                let xi = slice.damping;
                let g_star = slice.g_mod * Complex64::new(1.0 - 2.0 * xi * xi, 2.0 * xi * f64::sqrt(1.0 - xi * xi));
                let vs_star = (g_star / slice.density).sqrt();
                let ikz = Complex64::new(0.0, 1.0) * (omega / vs_star) * z;
                a = a * ikz.exp();
                b = b * (-ikz).exp();
            }
        }
        let value = match location.wave {
            Wave::Outcrop => 2.0 * a,
            Wave::Within => a + b,
            Wave::Incoming => a,
        };
        Ok(value)
    }
}

impl LinearCalculator for LinearElasticCalculator {
    fn transfer_function(
        &self,
        motion: &Motion,
        profile: &Profile,
        input: &Location,
        output: &Location,
    ) -> Result<Vec<Complex64>, Error> {
        let mut values = Vec::new();
        for omega in motion.angular_freqs() {
            let amplitudes = self.wave_amplitudes(profile, omega)?;
            let num = self.wave_at(profile, &amplitudes, omega, output)?;
            let den = self.wave_at(profile, &amplitudes, omega, input)?;
            if den.norm() == 0.0 {
                return Err(EngineError::new(format!("zero input wave at ω = {}", omega)).into());
            }
            values.push(num / den);
        }
        Ok(values)
    }
}

/// Returns the first natural frequency (Hz) of a uniform layer over a rigid base
pub fn fundamental_frequency(shear_vel: f64, height: f64) -> f64 {
    shear_vel / (4.0 * height)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
