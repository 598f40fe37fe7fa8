use super::Motion;
use crate::base::Location;
use crate::profile::Profile;
use crate::Error;
use russell_lab::Complex64;
use serde::{Deserialize, Serialize};

/// Holds the converged state of a slice after an equivalent-linear run
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct LayerState {
    /// Strain-compatible shear wave velocity (m/s)
    pub shear_vel: f64,

    /// Small-strain shear wave velocity (m/s)
    pub initial_shear_vel: f64,

    /// Unit weight (N/m³)
    pub unit_wt: f64,

    /// Strain-compatible damping ratio
    pub damping: f64,

    /// Thickness (m)
    pub thickness: f64,
}

/// Defines the trait for linear wave-propagation calculators
pub trait LinearCalculator {
    /// Calculates the acceleration transfer function between two locations
    ///
    /// Returns one complex value per frequency of `motion`.
    fn transfer_function(
        &self,
        motion: &Motion,
        profile: &Profile,
        input: &Location,
        output: &Location,
    ) -> Result<Vec<Complex64>, Error>;
}

/// Defines the trait for equivalent-linear site-response engines
///
/// Implementations iterate the slice properties until they are compatible with the
/// strains induced by the motion. Failures are reported as [crate::base::EngineError].
pub trait EquivalentLinearEngine {
    /// Runs the analysis with the motion applied at the input location
    fn run(&mut self, motion: &Motion, profile: &Profile, input: &Location) -> Result<(), Error>;

    /// Returns the converged state at a location (after `run`)
    fn layer_state(&self, location: &Location) -> Result<LayerState, Error>;
}
