use super::{CurveFamily, ParamModulus, ParamSoilLayer, ParamSoilProfile};

/// Holds sample parameters used in tests and documentation
pub struct SampleParams;

impl SampleParams {
    /// Returns parameters for a sand layer modelled with PM4Sand
    pub fn param_pm4sand_layer(thickness: f64) -> ParamSoilLayer {
        ParamSoilLayer {
            name: "loose sand".to_string(),
            thickness,
            unit_dry_weight: 16_500.0, // N/m³
            unit_sat_weight: 19_500.0, // N/m³
            plasticity_index: None,
            phi: Some(32.0), // degree
            damping: 0.03,
            g_mod_red: None,
            modulus: ParamModulus::Pm4Sand {
                g0_mod: 600.0,
                crr_n15: Some(0.15),
                h_po: Some(0.4),
                p_atm: None,
            },
            curve: CurveFamily::ConfiningStress,
        }
    }

    /// Returns parameters for a sand layer modelled with the Stress-Density model
    pub fn param_stress_density_layer(thickness: f64) -> ParamSoilLayer {
        ParamSoilLayer {
            name: "dense sand".to_string(),
            thickness,
            unit_dry_weight: 17_000.0, // N/m³
            unit_sat_weight: 20_000.0, // N/m³
            plasticity_index: None,
            phi: Some(36.0), // degree
            damping: 0.02,
            g_mod_red: None,
            modulus: ParamModulus::StressDensity {
                g0_mod: 550.0,
                n_e: 0.6,
                e_curr: 0.72,
                crr_n15: Some(0.25),
                p_atm: None,
            },
            curve: CurveFamily::None,
        }
    }

    /// Returns parameters for a clay layer with constant modulus
    pub fn param_clay_layer(thickness: f64) -> ParamSoilLayer {
        ParamSoilLayer {
            name: "soft clay".to_string(),
            thickness,
            unit_dry_weight: 16_000.0, // N/m³
            unit_sat_weight: 17_500.0, // N/m³
            plasticity_index: Some(0.2),
            phi: None,
            damping: 0.04,
            g_mod_red: None,
            modulus: ParamModulus::Constant { g_mod: 25e6 }, // Pa
            curve: CurveFamily::None,
        }
    }

    /// Returns parameters for a profile with a clay crust over PM4Sand
    pub fn param_two_layer_profile() -> ParamSoilProfile {
        ParamSoilProfile {
            gwl: 2.0,
            layers: vec![Self::param_clay_layer(3.0), Self::param_pm4sand_layer(6.5)],
            increments: None,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
