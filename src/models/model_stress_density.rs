use crate::base::ConfigurationError;
use crate::Error;
use serde::{Deserialize, Serialize};

/// Holds the calibration parameters of the Stress-Density model
///
/// The shear modulus follows a power law whose reference factor depends on the void ratio:
///
/// ```text
/// G  = G₀ · pₐ · (p / pₐ)^nₑ
/// G₀ = A · (2.17 - e)² / (1 + e)
/// ```
///
/// # Reference
///
/// * Cubrinovski M, Ishihara K (1998) State concept and modified elastoplasticity for sand
///   modelling, Soils and Foundations, 38(4):213-225
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ModelStressDensity {
    pub big_a: Option<f64>,   // elastic shear constant A
    pub n_e: Option<f64>,     // elastic modulus exponent
    pub e_curr: Option<f64>,  // current void ratio
    pub crr_n15: Option<f64>, // cyclic resistance ratio for 15 cycles
    pub a1: Option<f64>,      // peak stress ratio coefficient
    pub b1: Option<f64>,      // peak stress ratio coefficient
    pub a2: Option<f64>,      // max. shear modulus coefficient
    pub b2: Option<f64>,      // max. shear modulus coefficient
    pub a3: Option<f64>,      // min. shear modulus coefficient
    pub b3: Option<f64>,      // min. shear modulus coefficient
    pub fd: Option<f64>,      // degradation constant
    pub mu_0: Option<f64>,    // small strain dilatancy coefficient
    pub mu_cyc: Option<f64>,  // cyclic dilatancy coefficient
    pub sc: Option<f64>,      // dilatancy strain
    pub big_m: Option<f64>,   // critical state stress ratio
    pub hsl: Option<f64>,     // QSS-line void ratio parameter
    pub ps: Option<f64>,      // QSS-line mean effective pressure
}

impl ModelStressDensity {
    /// Deprecated names and the canonical parameters they write to
    pub const ALIASES: &'static [(&'static str, &'static str)] = &[("csr_n15", "crr_n15")];

    /// Allocates a new instance with no parameter set
    pub fn new() -> Self {
        ModelStressDensity::default()
    }

    /// Returns the void-ratio function (2.17 - e)² / (1 + e)
    fn void_ratio_factor(&self) -> Result<f64, Error> {
        let e = self.e_curr.ok_or(ConfigurationError::MissingParameter("e_curr"))?;
        Ok((2.17 - e) * (2.17 - e) / (1.0 + e))
    }

    /// Returns the (derived) reference modulus factor G₀
    pub fn g0_mod(&self) -> Result<f64, Error> {
        let big_a = self.big_a.ok_or(ConfigurationError::MissingParameter("big_a"))?;
        Ok(big_a * self.void_ratio_factor()?)
    }

    /// Returns the elastic shear constant A reproducing a given G₀ at the current void ratio
    pub fn big_a_from_g0_mod(&self, g0_mod: f64) -> Result<f64, Error> {
        Ok(g0_mod / self.void_ratio_factor()?)
    }

    /// Returns the pressure exponent nₑ
    pub fn exponent(&self) -> Result<f64, Error> {
        Ok(self.n_e.ok_or(ConfigurationError::MissingParameter("n_e"))?)
    }
}

parameter_slots!(ModelStressDensity {
    big_a, n_e, e_curr, crr_n15, a1, b1, a2, b2, a3, b3, fd, mu_0, mu_cyc, sc, big_m, hsl, ps
});

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
