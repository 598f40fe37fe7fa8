use serde::{Deserialize, Serialize};

/// Holds the calibration parameters of the PM4Sand plasticity model
///
/// The shear modulus follows a square-root pressure law:
///
/// ```text
/// G = G₀ · pₐ · (p / pₐ)^0.5
/// ```
///
/// # Reference
///
/// * Boulanger RW, Ziotopoulou K (2017) PM4Sand (Version 3.1): A sand plasticity model for
///   earthquake engineering applications, Report UCD/CGM-17/01, UC Davis
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ModelPm4Sand {
    pub g0_mod: Option<f64>,   // normalised shear modulus factor G₀
    pub crr_n15: Option<f64>,  // cyclic resistance ratio for 15 cycles
    pub h_po: Option<f64>,     // contraction rate parameter
    pub h_o: Option<f64>,      // plastic modulus ratio
    pub n_b: Option<f64>,      // bounding surface parameter
    pub n_d: Option<f64>,      // dilatancy surface parameter
    pub a_do: Option<f64>,     // dilatancy parameter
    pub z_max: Option<f64>,    // fabric-dilatancy tensor maximum
    pub c_z: Option<f64>,      // fabric growth parameter
    pub c_e: Option<f64>,      // strain accumulation factor
    pub phi_cv: Option<f64>,   // critical state friction angle
    pub g_degr: Option<f64>,   // elastic modulus degradation factor
    pub c_dr: Option<f64>,     // rotated dilatancy surface factor
    pub c_kaf: Option<f64>,    // plastic modulus factor for fabric effects
    pub q_bolt: Option<f64>,   // critical state line parameter Q
    pub r_bolt: Option<f64>,   // critical state line parameter R
    pub m_par: Option<f64>,    // yield surface constant
    pub f_sed: Option<f64>,    // sedimentation reduction factor
    pub p_sed: Option<f64>,    // sedimentation mean stress
    pub mc_ratio: Option<f64>, // Mohr-Coulomb ratio
    pub mc_c: Option<f64>,     // Mohr-Coulomb cohesion
}

impl ModelPm4Sand {
    /// Deprecated names and the canonical parameters they write to
    pub const ALIASES: &'static [(&'static str, &'static str)] = &[("hp0", "h_po"), ("csr_n15", "crr_n15")];

    /// Pressure exponent of the shear modulus law
    pub const EXPONENT: f64 = 0.5;

    /// Allocates a new instance with no parameter set
    pub fn new() -> Self {
        ModelPm4Sand::default()
    }
}

parameter_slots!(ModelPm4Sand {
    g0_mod, crr_n15, h_po, h_o, n_b, n_d, a_do, z_max, c_z, c_e, phi_cv, g_degr, c_dr, c_kaf, q_bolt, r_bolt, m_par, f_sed, p_sed, mc_ratio, mc_c
});

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ModelPm4Sand;

    #[test]
    fn slot_covers_all_parameters() {
        let mut model = ModelPm4Sand::new();
        for (i, name) in ModelPm4Sand::PARAMETERS.iter().enumerate() {
            let slot = model.slot(name).unwrap();
            assert_eq!(*slot, None);
            *slot = Some(i as f64);
        }
        for (i, name) in ModelPm4Sand::PARAMETERS.iter().enumerate() {
            assert_eq!(model.value(name), Some(Some(i as f64)));
        }
        assert!(model.slot("big_a").is_none());
        assert_eq!(model.value("e_curr"), None);
    }

    #[test]
    fn aliases_point_to_parameters() {
        for (_, canonical) in ModelPm4Sand::ALIASES {
            assert!(ModelPm4Sand::PARAMETERS.contains(canonical));
        }
    }
}
