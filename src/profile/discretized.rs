use super::SoilType;
use crate::base::{At, ConfigurationError, Location};
use crate::Error;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds a slice of a discretized profile
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct DiscretizedSlice {
    /// Depth of the top of the slice (m)
    pub depth: f64,

    /// Thickness (m)
    pub thickness: f64,

    /// Unit weight (N/m³)
    pub unit_wt: f64,

    /// Mass density (kg/m³)
    pub density: f64,

    /// Shear modulus (Pa)
    pub g_mod: f64,

    /// Shear wave velocity (m/s)
    pub shear_vel: f64,

    /// Damping ratio
    pub damping: f64,

    /// Stress-strain behavior
    pub soil_type: SoilType,

    /// 1-based index of the source layer
    pub layer: usize,
}

impl DiscretizedSlice {
    /// Allocates a constant-damping slice
    ///
    /// The shear modulus is computed from the density and the shear wave velocity.
    pub fn linear(
        name: &str,
        depth: f64,
        thickness: f64,
        unit_wt: f64,
        density: f64,
        shear_vel: f64,
        damping: f64,
        layer: usize,
    ) -> Self {
        DiscretizedSlice {
            depth,
            thickness,
            unit_wt,
            density,
            g_mod: density * shear_vel * shear_vel,
            shear_vel,
            damping,
            soil_type: SoilType::linear(name, unit_wt, damping),
            layer,
        }
    }

    /// Returns the depth of the bottom of the slice
    pub fn bottom(&self) -> f64 {
        self.depth + self.thickness
    }
}

/// Holds a discretized profile: slices from the surface downwards and the groundwater depth
///
/// The last slice represents the base of the profile (half-space) in propagation analyses.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    /// Slices from the surface downwards
    pub slices: Vec<DiscretizedSlice>,

    /// Groundwater depth (m)
    pub gwl: f64,
}

impl Profile {
    /// Allocates a new instance
    pub fn new(slices: Vec<DiscretizedSlice>, gwl: f64) -> Self {
        Profile { slices, gwl }
    }

    /// Returns the number of slices
    pub fn n_slices(&self) -> usize {
        self.slices.len()
    }

    /// Returns the top depth of each slice
    pub fn depths(&self) -> Vec<f64> {
        self.slices.iter().map(|s| s.depth).collect()
    }

    /// Returns the sum of the slice thicknesses
    pub fn height(&self) -> f64 {
        self.slices.iter().map(|s| s.thickness).sum()
    }

    /// Returns the index of the slice at a given position
    ///
    /// A depth belongs to the slice whose top is the deepest one not below that depth;
    /// depths beyond the base belong to the last slice.
    pub fn index_of(&self, at: At) -> Result<usize, Error> {
        let n = self.slices.len();
        match at {
            At::Depth(depth) => {
                if n == 0 || !(depth >= 0.0) {
                    return Err(ConfigurationError::LocationDepth(depth).into());
                }
                let mut index = 0;
                for (i, slice) in self.slices.iter().enumerate() {
                    if slice.depth <= depth {
                        index = i;
                    } else {
                        break;
                    }
                }
                Ok(index)
            }
            At::Index(index) => {
                let i = if index < 0 { n as isize + index } else { index };
                if i < 0 || i >= n as isize {
                    return Err(ConfigurationError::LocationIndex { index, n_slices: n }.into());
                }
                Ok(i as usize)
            }
        }
    }

    /// Returns the slice at a location
    pub fn location(&self, location: &Location) -> Result<&DiscretizedSlice, Error> {
        let index = self.index_of(location.at)?;
        Ok(&self.slices[index])
    }

    /// Reads a JSON file containing a profile
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

    /// Writes a JSON file with the profile
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
