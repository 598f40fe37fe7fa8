use super::{DeprecationNotice, HistoryEntry, ModelPm4Sand, ModelStressDensity, ParamUpdate, ParameterHistory};
use crate::base::{clean_float, ConfigurationError, RawValue, P_ATM};
use crate::Error;
use russell_lab::math::PI;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines the kind of stress-dependent soil model
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum ModelKind {
    /// Square-root pressure law
    Pm4Sand,

    /// General power law with a void-ratio dependent reference modulus
    StressDensity,
}

/// Holds the variant-specific parameters
#[derive(Clone, Debug, PartialEq)]
pub enum ModelVariant {
    Pm4Sand(ModelPm4Sand),
    StressDensity(ModelStressDensity),
}

/// Implements a stress-dependent shear modulus model with calibration and parameter history
///
/// # Notes
///
/// * Stresses are given in the same units as `p_atm` (Pa by default)
/// * The friction angle `phi` is given in degrees
/// * The mean stress proxy is `p = σv'·(1 + K0)/2` with `K0 = 1 - sin(φ)`
/// * Every successful assignment appends one entry to the [ParameterHistory]
///
/// # Examples
///
/// ```
/// use liqsra::models::ConstitutiveModel;
///
/// let mut model = ConstitutiveModel::new_pm4sand();
/// model.set_phi(32.0);
/// model.set_g0_mod(500.0).unwrap();
/// let g_mod = model.shear_modulus_at(100_000.0).unwrap();
/// assert!(g_mod > 0.0);
/// assert_eq!(model.history().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ConstitutiveModel {
    variant: ModelVariant,
    phi: Option<f64>,
    p_atm: Option<f64>,
    history: ParameterHistory,
}

impl ConstitutiveModel {
    /// Allocates a new instance of a given kind
    pub fn new(kind: ModelKind) -> Self {
        let variant = match kind {
            ModelKind::Pm4Sand => ModelVariant::Pm4Sand(ModelPm4Sand::new()),
            ModelKind::StressDensity => ModelVariant::StressDensity(ModelStressDensity::new()),
        };
        ConstitutiveModel {
            variant,
            phi: None,
            p_atm: Some(P_ATM),
            history: ParameterHistory::new(),
        }
    }

    /// Allocates a new PM4Sand-style model
    pub fn new_pm4sand() -> Self {
        ConstitutiveModel::new(ModelKind::Pm4Sand)
    }

    /// Allocates a new Stress-Density-style model
    pub fn new_stress_density() -> Self {
        ConstitutiveModel::new(ModelKind::StressDensity)
    }

    /// Returns the kind of model
    pub fn kind(&self) -> ModelKind {
        match self.variant {
            ModelVariant::Pm4Sand(..) => ModelKind::Pm4Sand,
            ModelVariant::StressDensity(..) => ModelKind::StressDensity,
        }
    }

    /// Returns access to the variant-specific parameters
    pub fn variant(&self) -> &ModelVariant {
        &self.variant
    }

    /// Returns the parameter history
    pub fn history(&self) -> &ParameterHistory {
        &self.history
    }

    /// Returns the friction angle (degrees)
    pub fn phi(&self) -> Option<f64> {
        self.phi
    }

    /// Returns the atmospheric pressure
    pub fn p_atm(&self) -> Option<f64> {
        self.p_atm
    }

    /// Returns the reference modulus factor G₀
    ///
    /// For the Stress-Density variant, G₀ is derived from `big_a` and `e_curr`.
    pub fn g0_mod(&self) -> Option<f64> {
        match &self.variant {
            ModelVariant::Pm4Sand(m) => m.g0_mod,
            ModelVariant::StressDensity(m) => m.g0_mod().ok(),
        }
    }

    /// Returns the cyclic resistance ratio for 15 cycles
    pub fn crr_n15(&self) -> Option<f64> {
        match &self.variant {
            ModelVariant::Pm4Sand(m) => m.crr_n15,
            ModelVariant::StressDensity(m) => m.crr_n15,
        }
    }

    /// Returns the contraction rate parameter (PM4Sand only)
    pub fn h_po(&self) -> Option<f64> {
        match &self.variant {
            ModelVariant::Pm4Sand(m) => m.h_po,
            ModelVariant::StressDensity(..) => None,
        }
    }

    /// Returns the current value of a parameter given its canonical name or a deprecated alias
    pub fn get(&self, name: &str) -> Result<Option<f64>, Error> {
        let (canonical, _) = self.resolve(name)?;
        let value = match canonical {
            "phi" => self.phi,
            "p_atm" => self.p_atm,
            "g0_mod" => self.g0_mod(),
            _ => match &self.variant {
                ModelVariant::Pm4Sand(m) => m.value(canonical).flatten(),
                ModelVariant::StressDensity(m) => m.value(canonical).flatten(),
            },
        };
        Ok(value)
    }

    /// Sets a parameter given its canonical name or a deprecated alias
    ///
    /// The value is coerced with [clean_float]: an absent or non-numeric value clears the
    /// parameter and nothing is recorded. A present value is stored and appended to the
    /// history under the canonical name.
    ///
    /// Setting `g0_mod` on the Stress-Density variant solves for `big_a` at the current void
    /// ratio; the history then records `big_a`.
    pub fn set<'a>(&mut self, name: &str, value: impl Into<RawValue<'a>>) -> Result<ParamUpdate, Error> {
        let (canonical, notice) = self.resolve(name)?;
        if let Some(n) = &notice {
            log::warn!("{}", n);
        }
        let value = clean_float(value.into());
        let entry = match canonical {
            "phi" => {
                self.phi = value;
                value.map(|v| self.history.push(canonical, v))
            }
            "p_atm" => {
                self.p_atm = value;
                value.map(|v| self.history.push(canonical, v))
            }
            "g0_mod" => self.assign_g0_mod(value)?,
            _ => {
                let slot = match &mut self.variant {
                    ModelVariant::Pm4Sand(m) => m.slot(canonical),
                    ModelVariant::StressDensity(m) => m.slot(canonical),
                };
                match slot {
                    Some(s) => *s = value,
                    None => return Err(ConfigurationError::UnknownParameter(name.to_string()).into()),
                }
                value.map(|v| self.history.push(canonical, v))
            }
        };
        Ok(ParamUpdate { entry, notice })
    }

    /// Sets the friction angle (degrees)
    pub fn set_phi<'a>(&mut self, value: impl Into<RawValue<'a>>) -> ParamUpdate {
        let value = clean_float(value.into());
        self.phi = value;
        let entry = value.map(|v| self.history.push("phi", v));
        ParamUpdate { entry, notice: None }
    }

    /// Sets the atmospheric pressure
    pub fn set_p_atm<'a>(&mut self, value: impl Into<RawValue<'a>>) -> ParamUpdate {
        let value = clean_float(value.into());
        self.p_atm = value;
        let entry = value.map(|v| self.history.push("p_atm", v));
        ParamUpdate { entry, notice: None }
    }

    /// Sets the reference modulus factor G₀
    pub fn set_g0_mod<'a>(&mut self, value: impl Into<RawValue<'a>>) -> Result<ParamUpdate, Error> {
        self.set("g0_mod", value)
    }

    /// Sets the cyclic resistance ratio for 15 cycles
    pub fn set_crr_n15<'a>(&mut self, value: impl Into<RawValue<'a>>) -> Result<ParamUpdate, Error> {
        self.set("crr_n15", value)
    }

    /// Sets the cyclic resistance ratio for 15 cycles (deprecated; use [ConstitutiveModel::set_crr_n15])
    pub fn set_csr_n15<'a>(&mut self, value: impl Into<RawValue<'a>>) -> Result<ParamUpdate, Error> {
        self.set("csr_n15", value)
    }

    /// Sets the contraction rate parameter (PM4Sand only)
    pub fn set_h_po<'a>(&mut self, value: impl Into<RawValue<'a>>) -> Result<ParamUpdate, Error> {
        self.set("h_po", value)
    }

    /// Sets the contraction rate parameter (deprecated; use [ConstitutiveModel::set_h_po])
    pub fn set_hp0<'a>(&mut self, value: impl Into<RawValue<'a>>) -> Result<ParamUpdate, Error> {
        self.set("hp0", value)
    }

    /// Calculates the shear modulus at a vertical effective stress
    pub fn shear_modulus_at(&self, sigma_v_eff: f64) -> Result<f64, Error> {
        let p_atm = self.p_atm.ok_or(ConfigurationError::MissingParameter("p_atm"))?;
        let p = self.mean_stress_proxy(sigma_v_eff)?;
        let (g0_mod, n) = match &self.variant {
            ModelVariant::Pm4Sand(m) => {
                let g0 = m.g0_mod.ok_or(ConfigurationError::MissingParameter("g0_mod"))?;
                (g0, ModelPm4Sand::EXPONENT)
            }
            ModelVariant::StressDensity(m) => (m.g0_mod()?, m.exponent()?),
        };
        Ok(g0_mod * p_atm * f64::powf(p / p_atm, n))
    }

    /// Calibrates the reference modulus factor to reproduce a target shear modulus
    ///
    /// Solves G₀ (PM4Sand) or `big_a` (Stress-Density) in closed form such that
    /// `shear_modulus_at(sigma_v_eff)` returns `g_mod`.
    pub fn calibrate_from_target(&mut self, g_mod: f64, sigma_v_eff: f64) -> Result<ParamUpdate, Error> {
        if !(g_mod > 0.0) {
            return Err(ConfigurationError::InvalidSetting { name: "g_mod", value: g_mod }.into());
        }
        let p_atm = self.p_atm.ok_or(ConfigurationError::MissingParameter("p_atm"))?;
        let p = self.mean_stress_proxy(sigma_v_eff)?;
        let n = match &self.variant {
            ModelVariant::Pm4Sand(..) => ModelPm4Sand::EXPONENT,
            ModelVariant::StressDensity(m) => m.exponent()?,
        };
        let g0_mod = g_mod / p_atm / f64::powf(p / p_atm, n);
        self.set("g0_mod", g0_mod)
    }

    /// Returns the mean stress proxy p = σv'·(1 + K0)/2 with K0 = 1 - sin(φ)
    fn mean_stress_proxy(&self, sigma_v_eff: f64) -> Result<f64, Error> {
        if !(sigma_v_eff > 0.0) {
            return Err(ConfigurationError::NonPositiveStress(sigma_v_eff).into());
        }
        let phi = self.phi.ok_or(ConfigurationError::MissingParameter("phi"))?;
        let kk0 = 1.0 - f64::sin(phi * PI / 180.0);
        Ok(sigma_v_eff * (1.0 + kk0) / 2.0)
    }

    /// Assigns G₀, which is stored directly (PM4Sand) or through `big_a` (Stress-Density)
    fn assign_g0_mod(&mut self, value: Option<f64>) -> Result<Option<HistoryEntry>, Error> {
        match &mut self.variant {
            ModelVariant::Pm4Sand(m) => {
                m.g0_mod = value;
                Ok(value.map(|v| self.history.push("g0_mod", v)))
            }
            ModelVariant::StressDensity(m) => match value {
                Some(v) => {
                    let big_a = m.big_a_from_g0_mod(v)?;
                    m.big_a = Some(big_a);
                    Ok(Some(self.history.push("big_a", big_a)))
                }
                None => {
                    m.big_a = None;
                    Ok(None)
                }
            },
        }
    }

    /// Maps a parameter name to its canonical name, flagging deprecated aliases
    fn resolve(&self, name: &str) -> Result<(&'static str, Option<DeprecationNotice>), Error> {
        for common in ["phi", "p_atm", "g0_mod"] {
            if name == common {
                return Ok((common, None));
            }
        }
        let (parameters, aliases) = match &self.variant {
            ModelVariant::Pm4Sand(..) => (ModelPm4Sand::PARAMETERS, ModelPm4Sand::ALIASES),
            ModelVariant::StressDensity(..) => (ModelStressDensity::PARAMETERS, ModelStressDensity::ALIASES),
        };
        if let Some(&canonical) = parameters.iter().find(|p| **p == name) {
            return Ok((canonical, None));
        }
        if let Some(&(alias, canonical)) = aliases.iter().find(|(a, _)| *a == name) {
            return Ok((canonical, Some(DeprecationNotice { alias, canonical })));
        }
        Err(ConfigurationError::UnknownParameter(name.to_string()).into())
    }
}

impl fmt::Display for ConstitutiveModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.kind() {
            ModelKind::Pm4Sand => "PM4Sand",
            ModelKind::StressDensity => "StressDensityModel",
        };
        write!(f, "{} soil model, phi = {:?}, g0_mod = {:?}", name, self.phi, self.g0_mod())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
