use super::SoilLayer;
use crate::base::{Config, ConfigurationError, ParamSoilProfile};
use crate::Error;

/// Holds an ordered set of soil layers from the surface downwards
///
/// # Notes
///
/// * Layers are accessed with 1-based indices, as in the usual layer numbering
/// * Depths are measured from the surface (m); stresses are given in Pa
/// * The total vertical stress integrates the dry unit weight above the groundwater
///   depth and the saturated unit weight below it
/// * The pore pressure is hydrostatic: `γw · max(0, z - gwl)`
#[derive(Clone, Debug, PartialEq)]
pub struct SoilProfile {
    layers: Vec<SoilLayer>,
    gwl: f64,
    unit_water_weight: f64,
}

impl SoilProfile {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `layers` -- layers ordered from the surface downwards
    /// * `gwl` -- groundwater depth; must be in `[0, height]`
    /// * `unit_water_weight` -- unit weight of water (N/m³)
    pub fn new(layers: Vec<SoilLayer>, gwl: f64, unit_water_weight: f64) -> Result<Self, Error> {
        if layers.len() < 1 {
            return Err(ConfigurationError::EmptyProfile.into());
        }
        for (i, layer) in layers.iter().enumerate() {
            if !(layer.thickness > 0.0) {
                return Err(ConfigurationError::LayerThickness {
                    layer: i + 1,
                    value: layer.thickness,
                }
                .into());
            }
        }
        let height: f64 = layers.iter().map(|l| l.thickness).sum();
        if !(gwl >= 0.0 && gwl <= height) {
            return Err(ConfigurationError::GroundwaterDepth { value: gwl, height }.into());
        }
        Ok(SoilProfile {
            layers,
            gwl,
            unit_water_weight,
        })
    }

    /// Allocates a new instance from parameters
    pub fn from_param(param: &ParamSoilProfile, config: &Config) -> Result<Self, Error> {
        let layers = param
            .layers
            .iter()
            .map(|p| SoilLayer::from_param(p))
            .collect::<Result<Vec<_>, _>>()?;
        SoilProfile::new(layers, param.gwl, config.unit_water_weight)
    }

    /// Returns the number of layers
    pub fn n_layers(&self) -> usize {
        self.layers.len()
    }

    /// Returns a layer given its 1-based index
    pub fn layer(&self, index: usize) -> Result<&SoilLayer, Error> {
        if index < 1 || index > self.layers.len() {
            return Err(ConfigurationError::LayerIndex {
                index,
                n_layers: self.layers.len(),
            }
            .into());
        }
        Ok(&self.layers[index - 1])
    }

    /// Returns the thickness of a layer given its 1-based index
    pub fn layer_height(&self, index: usize) -> Result<f64, Error> {
        Ok(self.layer(index)?.thickness)
    }

    /// Returns an iterator over the layers from the surface downwards
    pub fn layers(&self) -> impl Iterator<Item = &SoilLayer> {
        self.layers.iter()
    }

    /// Returns the total height (sum of layer thicknesses)
    pub fn height(&self) -> f64 {
        self.layers.iter().map(|l| l.thickness).sum()
    }

    /// Returns the groundwater depth
    pub fn gwl(&self) -> f64 {
        self.gwl
    }

    /// Returns the unit weight of water
    pub fn unit_water_weight(&self) -> f64 {
        self.unit_water_weight
    }

    /// Calculates the total vertical stress at a depth
    ///
    /// Depths beyond the base use the properties of the last layer.
    pub fn vertical_total_stress(&self, depth: f64) -> f64 {
        let mut sigma = 0.0;
        let mut top = 0.0;
        let n = self.layers.len();
        for (i, layer) in self.layers.iter().enumerate() {
            let bottom = if i == n - 1 {
                f64::max(top + layer.thickness, depth)
            } else {
                top + layer.thickness
            };
            let z = f64::min(depth, bottom);
            if z <= top {
                break;
            }
            let dry = f64::max(0.0, f64::min(z, self.gwl) - top);
            let sat = (z - top) - dry;
            sigma += dry * layer.unit_dry_weight + sat * layer.unit_sat_weight;
            top = bottom;
        }
        sigma
    }

    /// Calculates the hydrostatic pore pressure at a depth
    pub fn hydrostatic_pressure(&self, depth: f64) -> f64 {
        f64::max(0.0, depth - self.gwl) * self.unit_water_weight
    }

    /// Calculates the vertical effective stress at a depth
    pub fn vertical_effective_stress(&self, depth: f64) -> f64 {
        self.vertical_total_stress(depth) - self.hydrostatic_pressure(depth)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
