use super::{DiscretizedSlice, ModulusPolicy, Profile, SoilLayer, SoilProfile, SoilType};
use crate::base::{logspace, Config, ConfigurationError, CurveFamily, PA_TO_KPA};
use crate::Error;
use russell_lab::math::PI;

/// Correlation constant J of Vardanega and Bolton (2013), Eq. 23
const VARDANEGA_J: f64 = 3.7;

/// Curvature of Vardanega and Bolton (2013), Eq. 22b
const VARDANEGA_CURVATURE: f64 = 0.943;

/// Minimum damping attached to the Vardanega and Bolton (2013) curves
const VARDANEGA_DAMPING_MIN: f64 = 0.02;

/// Returns the modified hyperbolic parameters of Vardanega and Bolton (2013)
///
/// # Input
///
/// * `plas_index` -- plasticity index in percent
///
/// # Output
///
/// Returns `(strain_ref, curvature)` with the reference strain in percent.
pub fn vardanega_2013_parameters(plas_index: f64) -> (f64, f64) {
    (VARDANEGA_J * (plas_index / 1000.0), VARDANEGA_CURVATURE)
}

/// Returns the number of slices of a layer
///
/// A layer thinner than the increment yields one slice. The last layer gets one extra slice
/// representing the base of the profile.
pub fn number_of_slices(thickness: f64, increment: f64, last: bool) -> usize {
    let mut n = f64::floor(thickness / increment) as usize;
    if n == 0 {
        n = 1;
    }
    if last {
        n += 1;
    }
    n
}

/// Holds the curve rule selected once for a layer
#[derive(Clone, Debug, PartialEq)]
enum CurveRule {
    /// Darendeli curves with the mean stress derived from the slice depth
    DarendeliAtDepth { kk0: f64, plas_index: f64 },

    /// Darendeli curves with a fixed mean stress (kPa)
    Darendeli { stress_mean: f64, plas_index: f64 },

    /// Modified hyperbolic curves after Vardanega and Bolton (2013)
    Vardanega { name: String, strain_ref: f64, curvature: f64 },

    /// Constant damping
    Linear,
}

/// Implements the discretization of soil profiles into slices
///
/// # Notes
///
/// For each layer `i` with thickness `T` and increment `d`:
///
/// * `n = max(1, floor(T/d))`, plus one for the last layer
/// * all slices of a layer have the thickness `T/n`
/// * properties are resolved at the bottom of each slice; the slice keeps its top depth
pub struct ProfileDiscretizer<'a> {
    config: &'a Config,
}

impl<'a> ProfileDiscretizer<'a> {
    /// Allocates a new instance
    pub fn new(config: &'a Config) -> Self {
        ProfileDiscretizer { config }
    }

    /// Discretizes a soil profile
    ///
    /// # Input
    ///
    /// * `soil_profile` -- the layered profile
    /// * `increments` -- target slice thickness per layer; `config.target_height` is used if None
    pub fn discretize(&self, soil_profile: &SoilProfile, increments: Option<&[f64]>) -> Result<Profile, Error> {
        let n_layers = soil_profile.n_layers();
        if let Some(incs) = increments {
            if incs.len() != n_layers {
                return Err(ConfigurationError::IncrementCount {
                    expected: n_layers,
                    found: incs.len(),
                }
                .into());
            }
        }
        let strains = logspace(
            self.config.strain_exp_range.0,
            self.config.strain_exp_range.1,
            self.config.n_strain,
        )?;
        let strains = strains.as_data().clone();
        let gwl = soil_profile.gwl();
        let mut slices = Vec::new();
        let mut cum_depth = 0.0;
        for i in 1..=n_layers {
            let layer = soil_profile.layer(i)?;
            let increment = match increments {
                Some(incs) => incs[i - 1],
                None => self.config.target_height,
            };
            if !(layer.thickness > 0.0) {
                return Err(ConfigurationError::LayerThickness {
                    layer: i,
                    value: layer.thickness,
                }
                .into());
            }
            if !(increment > 0.0) {
                return Err(ConfigurationError::Increment {
                    layer: i,
                    value: increment,
                }
                .into());
            }
            let n_slices = number_of_slices(layer.thickness, increment, i == n_layers);
            let slice_thickness = layer.thickness / (n_slices as f64);
            let rule = self.curve_rule(i, layer)?;
            log::debug!(
                "layer {} ({}): {} slices of {:.4} m",
                i,
                layer.name,
                n_slices,
                slice_thickness
            );
            for _ in 0..n_slices {
                let top = cum_depth;
                cum_depth += slice_thickness;
                let unit_wt = layer.unit_weight(cum_depth, gwl);
                let density = unit_wt / self.config.gravity;
                let mut g_mod = match &layer.modulus {
                    ModulusPolicy::Constant(g_mod) => *g_mod,
                    ModulusPolicy::StressDependent(model) => {
                        let sigma_v_eff = soil_profile.vertical_effective_stress(cum_depth);
                        model
                            .shear_modulus_at(sigma_v_eff)
                            .map_err(|e| ConfigurationError::in_layer(i, e))?
                    }
                };
                if let Some(red) = layer.g_mod_red {
                    g_mod *= red;
                }
                let shear_vel = f64::sqrt(g_mod / density);
                let soil_type = self.soil_type(&rule, layer, soil_profile, cum_depth, unit_wt, &strains);
                slices.push(DiscretizedSlice {
                    depth: top,
                    thickness: slice_thickness,
                    unit_wt,
                    density,
                    g_mod,
                    shear_vel,
                    damping: soil_type.damping_min(),
                    soil_type,
                    layer: i,
                });
            }
        }
        Ok(Profile::new(slices, gwl))
    }

    /// Selects the curve rule of a layer (first matching rule wins)
    fn curve_rule(&self, index: usize, layer: &SoilLayer) -> Result<CurveRule, Error> {
        let plas_index = 100.0 * layer.plasticity_index.unwrap_or(0.0);
        let rule = match layer.curve {
            CurveFamily::ConfiningStress => {
                let phi = layer.friction_angle().ok_or(ConfigurationError::LayerAttribute {
                    layer: index,
                    name: "phi",
                })?;
                let kk0 = 1.0 - f64::sin(phi * PI / 180.0);
                CurveRule::DarendeliAtDepth { kk0, plas_index }
            }
            CurveFamily::MeanStress { sigma_m_eff } => CurveRule::Darendeli {
                stress_mean: sigma_m_eff,
                plas_index,
            },
            CurveFamily::None => match layer.plasticity_index {
                Some(ip) => {
                    let (strain_ref, curvature) = vardanega_2013_parameters(100.0 * ip);
                    CurveRule::Vardanega {
                        name: format!("vardanega (2013) I_p = {:.2}", ip),
                        strain_ref,
                        curvature,
                    }
                }
                None => CurveRule::Linear,
            },
        };
        Ok(rule)
    }

    /// Builds the soil type of a slice
    fn soil_type(
        &self,
        rule: &CurveRule,
        layer: &SoilLayer,
        soil_profile: &SoilProfile,
        depth: f64,
        unit_wt: f64,
        strains: &[f64],
    ) -> SoilType {
        match rule {
            CurveRule::DarendeliAtDepth { kk0, plas_index } => {
                let sigma_v_eff = soil_profile.vertical_effective_stress(depth);
                SoilType::Darendeli {
                    unit_wt,
                    plas_index: *plas_index,
                    ocr: 1.0,
                    stress_mean: sigma_v_eff * (1.0 + 2.0 * kk0) / 3.0 * PA_TO_KPA,
                    strains: strains.to_vec(),
                }
            }
            CurveRule::Darendeli {
                stress_mean,
                plas_index,
            } => SoilType::Darendeli {
                unit_wt,
                plas_index: *plas_index,
                ocr: 1.0,
                stress_mean: *stress_mean,
                strains: strains.to_vec(),
            },
            CurveRule::Vardanega {
                name,
                strain_ref,
                curvature,
            } => SoilType::ModifiedHyperbolic {
                name: name.clone(),
                unit_wt,
                strain_ref: *strain_ref,
                curvature: *curvature,
                damping_min: VARDANEGA_DAMPING_MIN,
                strains: strains.to_vec(),
            },
            CurveRule::Linear => SoilType::linear(&layer.name, unit_wt, layer.damping),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{number_of_slices, vardanega_2013_parameters, ProfileDiscretizer};
    use crate::base::{Config, ConfigurationError, CurveFamily};
    use crate::models::ConstitutiveModel;
    use crate::profile::{SoilLayer, SoilProfile, SoilType};
    use crate::Error;
    use russell_lab::approx_eq;

    #[test]
    fn number_of_slices_works() {
        assert_eq!(number_of_slices(10.0, 1.0, false), 10);
        assert_eq!(number_of_slices(10.0, 1.0, true), 11);
        assert_eq!(number_of_slices(2.5, 1.0, false), 2);
        assert_eq!(number_of_slices(0.4, 1.0, false), 1);
        assert_eq!(number_of_slices(0.4, 1.0, true), 2);
    }

    #[test]
    fn vardanega_parameters_work() {
        let (strain_ref, curvature) = vardanega_2013_parameters(20.0);
        approx_eq(strain_ref, 0.074, 1e-15);
        assert_eq!(curvature, 0.943);
    }

    #[test]
    fn single_layer_works() -> Result<(), Error> {
        let config = Config::new();
        let layer = SoilLayer::new("sand", 10.0, 18_000.0, 19_000.0, 40e6).with_damping(0.05);
        let sp = SoilProfile::new(vec![layer], 5.0, 9800.0)?;
        let profile = ProfileDiscretizer::new(&config).discretize(&sp, None)?;
        assert_eq!(profile.n_slices(), 11);
        assert_eq!(profile.gwl, 5.0);
        for (j, slice) in profile.slices.iter().enumerate() {
            approx_eq(slice.thickness, 10.0 / 11.0, 1e-15);
            approx_eq(slice.depth, (j as f64) * 10.0 / 11.0, 1e-13);
            approx_eq(slice.shear_vel * slice.shear_vel * slice.density, slice.g_mod, 1e-6);
            assert_eq!(slice.layer, 1);
            assert_eq!(slice.soil_type, SoilType::linear("sand", slice.unit_wt, 0.05));
            assert_eq!(slice.damping, 0.05);
        }
        approx_eq(profile.height(), 10.0, 1e-12);
        // the bottom of slice 5 (index 4) is at 4.545 m, above the groundwater depth
        assert_eq!(profile.slices[4].unit_wt, 18_000.0);
        assert_eq!(profile.slices[5].unit_wt, 19_000.0);
        approx_eq(profile.slices[0].density, 18_000.0 / 9.8, 1e-12);
        Ok(())
    }

    #[test]
    fn layer_thickness_is_preserved() -> Result<(), Error> {
        let config = Config::new();
        let layers = vec![
            SoilLayer::new("a", 2.7, 17_000.0, 19_000.0, 20e6),
            SoilLayer::new("b", 0.3, 17_000.0, 19_000.0, 30e6),
            SoilLayer::new("c", 4.25, 18_000.0, 20_000.0, 50e6),
        ];
        let sp = SoilProfile::new(layers, 1.0, 9800.0)?;
        let increments = [0.5, 1.0, 1.5];
        let profile = ProfileDiscretizer::new(&config).discretize(&sp, Some(&increments))?;
        let counts: Vec<_> = (1..=3)
            .map(|i| profile.slices.iter().filter(|s| s.layer == i).count())
            .collect();
        assert_eq!(counts, &[5, 1, 3]);
        for (i, thickness) in [2.7, 0.3, 4.25].iter().enumerate() {
            let sum: f64 = profile
                .slices
                .iter()
                .filter(|s| s.layer == i + 1)
                .map(|s| s.thickness)
                .sum();
            assert!(f64::abs(sum - thickness) / thickness < 1e-9);
        }
        let depths = profile.depths();
        for j in 1..depths.len() {
            assert!(depths[j] >= depths[j - 1]);
        }
        Ok(())
    }

    #[test]
    fn stress_dependent_modulus_works() -> Result<(), Error> {
        let config = Config::new();
        let mut model = ConstitutiveModel::new_pm4sand();
        model.set_phi(30.0);
        model.set_g0_mod(500.0)?;
        let layer = SoilLayer::new("sand", 4.0, 16_000.0, 19_000.0, 0.0)
            .with_model(model.clone())
            .with_g_mod_red(0.8);
        let sp = SoilProfile::new(vec![layer], 2.0, 9800.0)?;
        let profile = ProfileDiscretizer::new(&config).discretize(&sp, None)?;
        assert_eq!(profile.n_slices(), 5);
        for slice in &profile.slices {
            let sigma_v_eff = sp.vertical_effective_stress(slice.bottom());
            let correct = 0.8 * model.shear_modulus_at(sigma_v_eff)?;
            approx_eq(slice.g_mod, correct, 1e-6);
            approx_eq(slice.shear_vel * slice.shear_vel * slice.density, slice.g_mod, 1e-5);
        }
        // stiffness increases with depth
        for j in 1..profile.n_slices() {
            assert!(profile.slices[j].g_mod > profile.slices[j - 1].g_mod);
        }
        Ok(())
    }

    #[test]
    fn layer_friction_angle_drives_the_modulus() -> Result<(), Error> {
        let config = Config::new();
        let mut with_phi = ConstitutiveModel::new_pm4sand();
        with_phi.set_phi(30.0);
        with_phi.set_g0_mod(500.0)?;

        // the model has no friction angle; the layer one is used
        let mut without_phi = ConstitutiveModel::new_pm4sand();
        without_phi.set_g0_mod(500.0)?;
        let layer = SoilLayer::new("sand", 3.0, 16_000.0, 19_000.0, 0.0)
            .with_phi(30.0)
            .with_model(without_phi)
            .with_curve(CurveFamily::ConfiningStress);
        let sp = SoilProfile::new(vec![layer], 1.0, 9800.0)?;
        let profile = ProfileDiscretizer::new(&config).discretize(&sp, None)?;
        for slice in &profile.slices {
            let sigma_v_eff = sp.vertical_effective_stress(slice.bottom());
            approx_eq(slice.g_mod, with_phi.shear_modulus_at(sigma_v_eff)?, 1e-6);
        }

        // a different model value is replaced by the layer value
        let mut other_phi = with_phi.clone();
        other_phi.set_phi(40.0);
        let layer = SoilLayer::new("sand", 3.0, 16_000.0, 19_000.0, 0.0)
            .with_phi(30.0)
            .with_model(other_phi);
        let sp = SoilProfile::new(vec![layer], 1.0, 9800.0)?;
        let other = ProfileDiscretizer::new(&config).discretize(&sp, None)?;
        for (a, b) in other.slices.iter().zip(profile.slices.iter()) {
            approx_eq(a.g_mod, b.g_mod, 1e-6);
        }
        Ok(())
    }

    #[test]
    fn model_errors_carry_the_layer_index() -> Result<(), Error> {
        let config = Config::new();
        let mut model = ConstitutiveModel::new_pm4sand();
        model.set_phi(30.0);
        let layers = vec![
            SoilLayer::new("fill", 1.0, 17_000.0, 19_000.0, 20e6),
            SoilLayer::new("sand", 3.0, 16_000.0, 19_000.0, 0.0).with_model(model),
        ];
        let sp = SoilProfile::new(layers, 1.0, 9800.0)?;
        assert_eq!(
            ProfileDiscretizer::new(&config).discretize(&sp, None).err(),
            Some(
                ConfigurationError::LayerModel {
                    layer: 2,
                    cause: Box::new(ConfigurationError::MissingParameter("g0_mod")),
                }
                .into()
            )
        );
        Ok(())
    }

    #[test]
    fn curve_selection_works() -> Result<(), Error> {
        let config = Config::new();
        let layers = vec![
            SoilLayer::new("sand", 2.0, 18_000.0, 20_000.0, 40e6)
                .with_phi(30.0)
                .with_curve(CurveFamily::ConfiningStress),
            SoilLayer::new("silt", 1.0, 18_000.0, 20_000.0, 40e6)
                .with_plasticity_index(0.1)
                .with_curve(CurveFamily::MeanStress { sigma_m_eff: 60.0 }),
            SoilLayer::new("clay", 1.0, 17_000.0, 18_000.0, 30e6).with_plasticity_index(0.2),
            SoilLayer::new("rock", 1.0, 22_000.0, 22_000.0, 2e9).with_damping(0.01),
        ];
        let sp = SoilProfile::new(layers, 0.0, 9800.0)?;
        let profile = ProfileDiscretizer::new(&config).discretize(&sp, None)?;
        assert_eq!(profile.n_slices(), 2 + 1 + 1 + 2);

        // rule 1: mean stress from the slice depth
        let slice = &profile.slices[0];
        let kk0 = 0.5;
        let sigma_v_eff = sp.vertical_effective_stress(1.0);
        match &slice.soil_type {
            SoilType::Darendeli {
                plas_index,
                ocr,
                stress_mean,
                strains,
                ..
            } => {
                assert_eq!(*plas_index, 0.0);
                assert_eq!(*ocr, 1.0);
                approx_eq(*stress_mean, sigma_v_eff * (1.0 + 2.0 * kk0) / 3.0 / 1000.0, 1e-9);
                assert_eq!(strains.len(), 30);
                approx_eq(strains[0], 1e-6, 1e-20);
                approx_eq(strains[29], f64::powf(10.0, -1.5), 1e-15);
            }
            _ => panic!("Darendeli soil type expected"),
        }

        // rule 2: precomputed mean stress
        match &profile.slices[2].soil_type {
            SoilType::Darendeli {
                plas_index,
                stress_mean,
                ..
            } => {
                approx_eq(*plas_index, 10.0, 1e-14);
                assert_eq!(*stress_mean, 60.0);
            }
            _ => panic!("Darendeli soil type expected"),
        }

        // rule 3: plasticity index only
        match &profile.slices[3].soil_type {
            SoilType::ModifiedHyperbolic {
                name,
                strain_ref,
                curvature,
                damping_min,
                ..
            } => {
                approx_eq(*strain_ref, 0.074, 1e-15);
                assert_eq!(*curvature, 0.943);
                assert_eq!(*damping_min, 0.02);
                assert_eq!(name, "vardanega (2013) I_p = 0.20");
            }
            _ => panic!("modified hyperbolic soil type expected"),
        }

        // rule 4: constant damping
        assert_eq!(
            profile.slices[5].soil_type,
            SoilType::linear("rock", 22_000.0, 0.01)
        );
        Ok(())
    }

    #[test]
    fn discretize_captures_errors() -> Result<(), Error> {
        let config = Config::new();
        let discretizer = ProfileDiscretizer::new(&config);
        let layers = vec![
            SoilLayer::new("a", 2.0, 17_000.0, 19_000.0, 20e6),
            SoilLayer::new("b", 3.0, 17_000.0, 19_000.0, 30e6).with_curve(CurveFamily::ConfiningStress),
        ];
        let sp = SoilProfile::new(layers, 1.0, 9800.0)?;
        assert_eq!(
            discretizer.discretize(&sp, Some(&[1.0])).err(),
            Some(ConfigurationError::IncrementCount { expected: 2, found: 1 }.into())
        );
        assert_eq!(
            discretizer.discretize(&sp, Some(&[1.0, 0.0])).err(),
            Some(ConfigurationError::Increment { layer: 2, value: 0.0 }.into())
        );
        assert_eq!(
            discretizer.discretize(&sp, None).err(),
            Some(ConfigurationError::LayerAttribute { layer: 2, name: "phi" }.into())
        );
        Ok(())
    }
}
