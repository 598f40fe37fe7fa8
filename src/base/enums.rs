use serde::{Deserialize, Serialize};

/// Selects the empirical nonlinear-curve family of a soil layer
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum CurveFamily {
    /// No empirical family; plasticity-based or constant-damping curves are used instead
    None,

    /// Darendeli curves with the mean effective stress derived at each slice depth
    ConfiningStress,

    /// Darendeli curves with a precomputed mean effective stress (kPa)
    MeanStress { sigma_m_eff: f64 },
}

impl Default for CurveFamily {
    fn default() -> Self {
        CurveFamily::None
    }
}

/// Defines the kind of wave used to locate a point in a profile
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Wave {
    /// Twice the upgoing wave; the motion recorded at a rock outcrop
    Outcrop,

    /// Upgoing plus downgoing waves; the motion recorded within the profile
    Within,

    /// Upgoing wave only
    Incoming,
}

/// Defines where a location sits in a profile
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum At {
    /// Depth measured from the surface
    Depth(f64),

    /// Slice index; negative values count from the bottom (-1 is the last slice)
    Index(isize),
}

/// Holds a location in a profile used to apply or record motions
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Location {
    pub wave: Wave,
    pub at: At,
}

impl Location {
    /// Returns an outcrop location at a given depth
    pub fn outcrop_at_depth(depth: f64) -> Self {
        Location {
            wave: Wave::Outcrop,
            at: At::Depth(depth),
        }
    }

    /// Returns an outcrop location at a given slice index
    pub fn outcrop_at_index(index: isize) -> Self {
        Location {
            wave: Wave::Outcrop,
            at: At::Index(index),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{At, CurveFamily, Location, Wave};

    #[test]
    fn derive_methods_work() {
        let family = CurveFamily::MeanStress { sigma_m_eff: 50.0 };
        let clone = family.clone();
        assert_eq!(format!("{:?}", clone), "MeanStress { sigma_m_eff: 50.0 }");
        assert_eq!(CurveFamily::default(), CurveFamily::None);
        let json = serde_json::to_string(&family).unwrap();
        let from_json: CurveFamily = serde_json::from_str(&json).unwrap();
        assert_eq!(from_json, family);
    }

    #[test]
    fn location_constructors_work() {
        let a = Location::outcrop_at_depth(12.0);
        assert_eq!(a.wave, Wave::Outcrop);
        assert_eq!(a.at, At::Depth(12.0));
        let b = Location::outcrop_at_index(-1);
        assert_eq!(b.at, At::Index(-1));
    }
}
