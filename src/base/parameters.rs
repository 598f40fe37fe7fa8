use super::CurveFamily;
use crate::Error;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds parameters for the shear modulus of a layer
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum ParamModulus {
    /// Constant shear modulus
    Constant {
        /// Shear modulus (Pa)
        g_mod: f64,
    },

    /// PM4Sand-style square-root pressure law
    Pm4Sand {
        /// Normalised shear modulus factor
        g0_mod: f64,

        /// Cyclic resistance ratio for 15 cycles
        #[serde(default)]
        crr_n15: Option<f64>,

        /// Contraction rate parameter
        #[serde(default)]
        h_po: Option<f64>,

        /// Atmospheric pressure (Pa); the default is used if absent
        #[serde(default)]
        p_atm: Option<f64>,
    },

    /// Stress-Density-style power law
    StressDensity {
        /// Normalised shear modulus factor (converted to the elastic shear constant A)
        g0_mod: f64,

        /// Elastic modulus exponent
        n_e: f64,

        /// Current void ratio
        e_curr: f64,

        /// Cyclic resistance ratio for 15 cycles
        #[serde(default)]
        crr_n15: Option<f64>,

        /// Atmospheric pressure (Pa); the default is used if absent
        #[serde(default)]
        p_atm: Option<f64>,
    },
}

/// Holds parameters for a soil layer
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ParamSoilLayer {
    /// Label
    pub name: String,

    /// Thickness (m)
    pub thickness: f64,

    /// Unit weight above the groundwater level (N/m³)
    pub unit_dry_weight: f64,

    /// Unit weight below the groundwater level (N/m³)
    pub unit_sat_weight: f64,

    /// Plasticity index as a fraction
    #[serde(default)]
    pub plasticity_index: Option<f64>,

    /// Friction angle (degrees)
    #[serde(default)]
    pub phi: Option<f64>,

    /// Damping ratio for constant-damping soil types
    #[serde(default)]
    pub damping: f64,

    /// Shear modulus reduction factor
    #[serde(default)]
    pub g_mod_red: Option<f64>,

    /// Shear modulus model
    pub modulus: ParamModulus,

    /// Empirical curve family
    #[serde(default)]
    pub curve: CurveFamily,
}

/// Holds parameters for a soil profile
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ParamSoilProfile {
    /// Groundwater depth (m)
    pub gwl: f64,

    /// Layers from the surface downwards
    pub layers: Vec<ParamSoilLayer>,

    /// Depth increments, one per layer; the configured target height is used if absent
    #[serde(default)]
    pub increments: Option<Vec<f64>>,
}

impl ParamSoilProfile {
    /// Reads a JSON file containing the parameters
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, Error>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| Error::File(format!("cannot open {}", path.display())))?;
        let reader = BufReader::new(file);
        let data = serde_json::from_reader(reader).map_err(|e| Error::File(format!("deserialize failed: {}", e)))?;
        Ok(data)
    }

    /// Writes a JSON file with the parameters
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), Error>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| Error::File("cannot create directory".to_string()))?;
        }
        let mut file = File::create(&path).map_err(|_| Error::File("cannot create file".to_string()))?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| Error::File("cannot write file".to_string()))?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
