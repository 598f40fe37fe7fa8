use crate::base::KPA_TO_ATM;
use russell_lab::math::PI;
use serde::{Deserialize, Serialize};

/// Number of loading cycles assumed by the Darendeli damping scaling
const NUM_CYCLES: f64 = 10.0;

/// Loading frequency (Hz) assumed by the Darendeli minimum damping
const FREQUENCY: f64 = 1.0;

/// Defines the stress-strain behavior attached to a slice of a profile
///
/// # Notes
///
/// * Strains in the `strains` arrays and passed to the methods are decimal (not percent)
/// * Reference strains are given in percent, as in the published correlations
/// * Damping ratios are decimal
/// * Unit weights are given in the units of the source profile (N/m³ by default)
///
/// # References
///
/// * Darendeli MB (2001) Development of a new family of normalized modulus reduction and
///   material damping curves, PhD thesis, University of Texas at Austin
/// * Vardanega PJ, Bolton MD (2013) Stiffness of clays and silts: normalizing shear modulus
///   and shear strain, ASCE J. Geotech. Geoenviron. Eng., 139(9):1575-1589
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub enum SoilType {
    /// Constant modulus and damping (linear visco-elastic)
    Linear { name: String, unit_wt: f64, damping: f64 },

    /// Darendeli (2001) empirical curves
    Darendeli {
        unit_wt: f64,
        plas_index: f64,  // plasticity index in percent
        ocr: f64,         // over-consolidation ratio
        stress_mean: f64, // mean effective stress in kPa
        strains: Vec<f64>,
    },

    /// Modified hyperbolic curves with explicit reference strain and curvature
    ModifiedHyperbolic {
        name: String,
        unit_wt: f64,
        strain_ref: f64, // reference strain in percent
        curvature: f64,
        damping_min: f64,
        strains: Vec<f64>,
    },
}

impl SoilType {
    /// Returns a constant-damping soil type
    pub fn linear(name: &str, unit_wt: f64, damping: f64) -> Self {
        SoilType::Linear {
            name: name.to_string(),
            unit_wt,
            damping,
        }
    }

    /// Returns the label of the soil type
    pub fn name(&self) -> String {
        match self {
            SoilType::Linear { name, .. } => name.clone(),
            SoilType::Darendeli {
                plas_index,
                stress_mean,
                ..
            } => format!("darendeli (2001) I_p = {:.2}, p' = {:.1} kPa", plas_index, stress_mean),
            SoilType::ModifiedHyperbolic { name, .. } => name.clone(),
        }
    }

    /// Returns the unit weight
    pub fn unit_wt(&self) -> f64 {
        match self {
            SoilType::Linear { unit_wt, .. } => *unit_wt,
            SoilType::Darendeli { unit_wt, .. } => *unit_wt,
            SoilType::ModifiedHyperbolic { unit_wt, .. } => *unit_wt,
        }
    }

    /// Returns true if modulus and damping depend on strain
    pub fn is_nonlinear(&self) -> bool {
        !matches!(self, SoilType::Linear { .. })
    }

    /// Returns the reference strain (percent) and curvature of the nonlinear curves
    pub fn curve_parameters(&self) -> Option<(f64, f64)> {
        match self {
            SoilType::Linear { .. } => None,
            SoilType::Darendeli {
                plas_index,
                ocr,
                stress_mean,
                ..
            } => {
                let strain_ref = (0.0352 + 0.0010 * plas_index * f64::powf(*ocr, 0.3246))
                    * f64::powf(stress_mean * KPA_TO_ATM, 0.3483);
                Some((strain_ref, 0.919))
            }
            SoilType::ModifiedHyperbolic {
                strain_ref, curvature, ..
            } => Some((*strain_ref, *curvature)),
        }
    }

    /// Returns the small-strain (minimum) damping ratio
    pub fn damping_min(&self) -> f64 {
        match self {
            SoilType::Linear { damping, .. } => *damping,
            SoilType::Darendeli {
                plas_index,
                ocr,
                stress_mean,
                ..
            } => {
                (0.8005 + 0.0129 * plas_index * f64::powf(*ocr, -0.1069))
                    * f64::powf(stress_mean * KPA_TO_ATM, -0.2889)
                    * (1.0 + 0.2919 * f64::ln(FREQUENCY))
                    / 100.0
            }
            SoilType::ModifiedHyperbolic { damping_min, .. } => *damping_min,
        }
    }

    /// Returns the normalized shear modulus G/Gmax at a (decimal) strain
    pub fn mod_reduc(&self, strain: f64) -> f64 {
        match self.curve_parameters() {
            Some((strain_ref, curvature)) => {
                let x = 100.0 * strain / strain_ref;
                1.0 / (1.0 + f64::powf(x, curvature))
            }
            None => 1.0,
        }
    }

    /// Returns the damping ratio at a (decimal) strain
    ///
    /// Nonlinear types use Masing damping scaled after Darendeli (2001) plus the minimum damping.
    pub fn damping(&self, strain: f64) -> f64 {
        let (strain_ref, curvature) = match self.curve_parameters() {
            Some(p) => p,
            None => return self.damping_min(),
        };
        let gamma = 100.0 * strain;
        if gamma <= 0.0 {
            return self.damping_min();
        }
        let d_a1 = (100.0 / PI)
            * (4.0 * (gamma - strain_ref * f64::ln((gamma + strain_ref) / strain_ref))
                / (gamma * gamma / (gamma + strain_ref))
                - 2.0);
        let a = curvature;
        let c1 = -1.1143 * a * a + 1.8618 * a + 0.2523;
        let c2 = 0.0805 * a * a - 0.0710 * a - 0.0095;
        let c3 = -0.0005 * a * a + 0.0002 * a + 0.0003;
        let d_masing = c1 * d_a1 + c2 * d_a1 * d_a1 + c3 * d_a1 * d_a1 * d_a1;
        let b = 0.6329 - 0.00566 * f64::ln(NUM_CYCLES);
        b * f64::powf(self.mod_reduc(strain), 0.1) * d_masing / 100.0 + self.damping_min()
    }

    /// Returns the strains attached to nonlinear types (empty for linear types)
    pub fn strains(&self) -> &[f64] {
        match self {
            SoilType::Linear { .. } => &[],
            SoilType::Darendeli { strains, .. } => strains,
            SoilType::ModifiedHyperbolic { strains, .. } => strains,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SoilType;
    use russell_lab::approx_eq;

    fn darendeli() -> SoilType {
        SoilType::Darendeli {
            unit_wt: 18_000.0,
            plas_index: 15.0,
            ocr: 1.0,
            stress_mean: 101.325,
            strains: vec![1e-6, 1e-4, 1e-2],
        }
    }

    fn hyperbolic() -> SoilType {
        SoilType::ModifiedHyperbolic {
            name: "clay".to_string(),
            unit_wt: 17_000.0,
            strain_ref: 0.074,
            curvature: 0.943,
            damping_min: 0.02,
            strains: Vec::new(),
        }
    }

    #[test]
    fn linear_works() {
        let soil = SoilType::linear("rock", 22_000.0, 0.01);
        assert!(!soil.is_nonlinear());
        assert_eq!(soil.name(), "rock");
        assert_eq!(soil.unit_wt(), 22_000.0);
        assert_eq!(soil.mod_reduc(0.01), 1.0);
        assert_eq!(soil.damping(0.01), 0.01);
        assert_eq!(soil.curve_parameters(), None);
        assert_eq!(soil.strains().len(), 0);
    }

    #[test]
    fn darendeli_parameters_work() {
        let soil = darendeli();
        assert!(soil.is_nonlinear());
        let (strain_ref, curvature) = soil.curve_parameters().unwrap();
        // at one atmosphere the stress term is unity
        approx_eq(strain_ref, 0.0352 + 0.0010 * 15.0, 1e-12);
        assert_eq!(curvature, 0.919);
        approx_eq(soil.damping_min(), (0.8005 + 0.0129 * 15.0) / 100.0, 1e-12);
        assert_eq!(soil.strains(), &[1e-6, 1e-4, 1e-2]);
    }

    #[test]
    fn mod_reduc_is_half_at_reference_strain() {
        for soil in [darendeli(), hyperbolic()] {
            let (strain_ref, _) = soil.curve_parameters().unwrap();
            approx_eq(soil.mod_reduc(strain_ref / 100.0), 0.5, 1e-14);
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for soil in [darendeli(), hyperbolic()] {
            let strains = [1e-6, 1e-5, 1e-4, 1e-3, 1e-2, 3e-2];
            for i in 1..strains.len() {
                assert!(soil.mod_reduc(strains[i]) < soil.mod_reduc(strains[i - 1]));
                assert!(soil.damping(strains[i]) > soil.damping(strains[i - 1]));
            }
            // damping tends to the minimum damping at small strains
            approx_eq(soil.damping(1e-9), soil.damping_min(), 1e-4);
        }
    }

    #[test]
    fn serialize_works() {
        let soil = hyperbolic();
        let json = serde_json::to_string(&soil).unwrap();
        let from_json: SoilType = serde_json::from_str(&json).unwrap();
        assert_eq!(from_json, soil);
    }
}
