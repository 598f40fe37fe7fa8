use crate::base::{CurveFamily, ParamModulus, ParamSoilLayer};
use crate::models::{ConstitutiveModel, ModelKind};
use crate::Error;

/// Defines how the shear modulus of a layer is resolved at depth
#[derive(Clone, Debug, PartialEq)]
pub enum ModulusPolicy {
    /// Constant shear modulus (Pa)
    Constant(f64),

    /// Shear modulus given by a stress-dependent soil model
    StressDependent(ConstitutiveModel),
}

/// Holds the data of a soil layer
///
/// All capabilities (modulus policy, reduction factor, curve family, plasticity) are explicit
/// fields so that the discretizer resolves them once per layer.
#[derive(Clone, Debug, PartialEq)]
pub struct SoilLayer {
    /// Label used by constant-damping soil types
    pub name: String,

    /// Thickness (m)
    pub thickness: f64,

    /// Unit weight above the groundwater level (N/m³)
    pub unit_dry_weight: f64,

    /// Unit weight below the groundwater level (N/m³)
    pub unit_sat_weight: f64,

    /// Plasticity index as a fraction (0.2 means 20%)
    pub plasticity_index: Option<f64>,

    /// Friction angle (degrees)
    pub phi: Option<f64>,

    /// Damping ratio used by constant-damping soil types
    pub damping: f64,

    /// Shear modulus policy
    pub modulus: ModulusPolicy,

    /// Shear modulus reduction factor
    pub g_mod_red: Option<f64>,

    /// Empirical curve family
    pub curve: CurveFamily,
}

impl SoilLayer {
    /// Allocates a new layer with a constant modulus and no optional capability
    pub fn new(name: &str, thickness: f64, unit_dry_weight: f64, unit_sat_weight: f64, g_mod: f64) -> Self {
        SoilLayer {
            name: name.to_string(),
            thickness,
            unit_dry_weight,
            unit_sat_weight,
            plasticity_index: None,
            phi: None,
            damping: 0.0,
            modulus: ModulusPolicy::Constant(g_mod),
            g_mod_red: None,
            curve: CurveFamily::None,
        }
    }

    /// Allocates a new layer from parameters
    ///
    /// Stress-dependent models are built through their setters, thus the parameter history of
    /// the model records the given values.
    pub fn from_param(param: &ParamSoilLayer) -> Result<Self, Error> {
        let modulus = match &param.modulus {
            ParamModulus::Constant { g_mod } => ModulusPolicy::Constant(*g_mod),
            ParamModulus::Pm4Sand {
                g0_mod,
                crr_n15,
                h_po,
                p_atm,
            } => {
                let mut model = ConstitutiveModel::new(ModelKind::Pm4Sand);
                model.set_phi(param.phi);
                if let Some(p) = p_atm {
                    model.set_p_atm(*p);
                }
                model.set_g0_mod(*g0_mod)?;
                model.set_crr_n15(*crr_n15)?;
                model.set_h_po(*h_po)?;
                ModulusPolicy::StressDependent(model)
            }
            ParamModulus::StressDensity {
                g0_mod,
                n_e,
                e_curr,
                crr_n15,
                p_atm,
            } => {
                let mut model = ConstitutiveModel::new(ModelKind::StressDensity);
                model.set_phi(param.phi);
                if let Some(p) = p_atm {
                    model.set_p_atm(*p);
                }
                model.set("n_e", *n_e)?;
                model.set("e_curr", *e_curr)?;
                model.set_g0_mod(*g0_mod)?;
                model.set_crr_n15(*crr_n15)?;
                ModulusPolicy::StressDependent(model)
            }
        };
        Ok(SoilLayer {
            name: param.name.clone(),
            thickness: param.thickness,
            unit_dry_weight: param.unit_dry_weight,
            unit_sat_weight: param.unit_sat_weight,
            plasticity_index: param.plasticity_index,
            phi: param.phi,
            damping: param.damping,
            modulus,
            g_mod_red: param.g_mod_red,
            curve: param.curve,
        })
    }

    /// Sets a stress-dependent modulus model
    ///
    /// The friction angle of the layer, if given, replaces the one of the model; otherwise
    /// the layer takes the friction angle of the model.
    pub fn with_model(mut self, model: ConstitutiveModel) -> Self {
        self.modulus = ModulusPolicy::StressDependent(model);
        match self.phi {
            Some(phi) => self.sync_model_phi(phi),
            None => self.phi = self.friction_angle(),
        }
        self
    }

    /// Sets the plasticity index (fraction)
    pub fn with_plasticity_index(mut self, value: f64) -> Self {
        self.plasticity_index = Some(value);
        self
    }

    /// Sets the friction angle (degrees) of the layer and of its soil model, if any
    pub fn with_phi(mut self, value: f64) -> Self {
        self.phi = Some(value);
        self.sync_model_phi(value);
        self
    }

    /// Sets the damping ratio used by constant-damping soil types
    pub fn with_damping(mut self, value: f64) -> Self {
        self.damping = value;
        self
    }

    /// Sets the shear modulus reduction factor
    pub fn with_g_mod_red(mut self, value: f64) -> Self {
        self.g_mod_red = Some(value);
        self
    }

    /// Sets the empirical curve family
    pub fn with_curve(mut self, curve: CurveFamily) -> Self {
        self.curve = curve;
        self
    }

    /// Assigns the friction angle of the layer to its soil model when they differ
    fn sync_model_phi(&mut self, phi: f64) {
        if let ModulusPolicy::StressDependent(model) = &mut self.modulus {
            if model.phi() != Some(phi) {
                model.set_phi(phi);
            }
        }
    }

    /// Returns the friction angle of the layer or, if absent, of its soil model
    pub fn friction_angle(&self) -> Option<f64> {
        match (&self.phi, &self.modulus) {
            (Some(phi), _) => Some(*phi),
            (None, ModulusPolicy::StressDependent(model)) => model.phi(),
            (None, ModulusPolicy::Constant(..)) => None,
        }
    }

    /// Returns the unit weight at a depth relative to the groundwater level
    ///
    /// The dry unit weight applies at and above the groundwater depth.
    pub fn unit_weight(&self, depth: f64, gwl: f64) -> f64 {
        if depth > gwl {
            self.unit_sat_weight
        } else {
            self.unit_dry_weight
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
