use super::{ConfigurationError, GRAVITY, UNIT_WATER_WEIGHT};
use crate::Error;
use std::fmt;

/// Holds configuration data for discretizing profiles and driving site-response runs
#[derive(Clone, Debug)]
pub struct Config {
    /// Gravity acceleration (m/s²)
    pub gravity: f64,

    /// Unit weight of water (N/m³)
    pub unit_water_weight: f64,

    /// Default depth increment used when no per-layer increment is given
    pub target_height: f64,

    /// Number of strain values attached to the nonlinear soil types
    pub n_strain: usize,

    /// Log10 of the smallest and largest strain values
    pub strain_exp_range: (f64, f64),

    /// Number of frequencies used by default for transfer functions
    pub n_freq: usize,

    /// Log10 of the smallest and largest default frequencies (Hz)
    pub freq_exp_range: (f64, f64),
}

impl Config {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Config {
            gravity: GRAVITY,
            unit_water_weight: UNIT_WATER_WEIGHT,
            target_height: 1.0,
            n_strain: 30,
            strain_exp_range: (-6.0, -1.5),
            n_freq: 200,
            freq_exp_range: (-0.7, 1.5),
        }
    }

    /// Sets the gravity acceleration
    pub fn set_gravity(&mut self, value: f64) -> Result<&mut Self, Error> {
        if value <= 0.0 {
            return Err(ConfigurationError::InvalidSetting { name: "gravity", value }.into());
        }
        self.gravity = value;
        Ok(self)
    }

    /// Sets the unit weight of water
    pub fn set_unit_water_weight(&mut self, value: f64) -> Result<&mut Self, Error> {
        if value < 0.0 {
            return Err(ConfigurationError::InvalidSetting {
                name: "unit_water_weight",
                value,
            }
            .into());
        }
        self.unit_water_weight = value;
        Ok(self)
    }

    /// Sets the default depth increment
    pub fn set_target_height(&mut self, value: f64) -> Result<&mut Self, Error> {
        if value <= 0.0 {
            return Err(ConfigurationError::InvalidSetting {
                name: "target_height",
                value,
            }
            .into());
        }
        self.target_height = value;
        Ok(self)
    }

    /// Sets the number of strain values and their log10 range
    pub fn set_strains(&mut self, n: usize, exp_min: f64, exp_max: f64) -> Result<&mut Self, Error> {
        if n < 2 {
            return Err(ConfigurationError::InvalidSetting {
                name: "n_strain",
                value: n as f64,
            }
            .into());
        }
        if exp_max <= exp_min {
            return Err(ConfigurationError::InvalidSetting {
                name: "strain_exp_max",
                value: exp_max,
            }
            .into());
        }
        self.n_strain = n;
        self.strain_exp_range = (exp_min, exp_max);
        Ok(self)
    }

    /// Sets the number of default frequencies and their log10 range
    pub fn set_frequencies(&mut self, n: usize, exp_min: f64, exp_max: f64) -> Result<&mut Self, Error> {
        if n < 2 {
            return Err(ConfigurationError::InvalidSetting {
                name: "n_freq",
                value: n as f64,
            }
            .into());
        }
        if exp_max <= exp_min {
            return Err(ConfigurationError::InvalidSetting {
                name: "freq_exp_max",
                value: exp_max,
            }
            .into());
        }
        self.n_freq = n;
        self.freq_exp_range = (exp_min, exp_max);
        Ok(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration data\n")?;
        write!(f, "==================\n")?;
        write!(f, "gravity = {:?}\n", self.gravity)?;
        write!(f, "unit_water_weight = {:?}\n", self.unit_water_weight)?;
        write!(f, "target_height = {:?}\n", self.target_height)?;
        write!(f, "n_strain = {:?}\n", self.n_strain)?;
        write!(f, "strain_exp_range = {:?}\n", self.strain_exp_range)?;
        write!(f, "n_freq = {:?}\n", self.n_freq)?;
        write!(f, "freq_exp_range = {:?}\n", self.freq_exp_range)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
