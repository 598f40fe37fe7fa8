use super::{EquivalentLinearEngine, LinearCalculator, Motion};
use crate::base::{logspace, At, Config, Location, Wave};
use crate::profile::{DiscretizedSlice, Profile, ProfileDiscretizer, SoilProfile};
use crate::Error;
use russell_lab::{Complex64, Vector};

/// Depth increment used to discretize profiles for equivalent-linear runs
const STRAIN_COMPATIBLE_INCREMENT: f64 = 1.0;

/// Name given to the constant-damping soil types of strain-compatible profiles
const STRAIN_COMPATIBLE_SOIL_NAME: &str = "soil";

/// Drives site-response calculations on discretized profiles
pub struct SiteResponseDriver<'a> {
    config: &'a Config,
}

impl<'a> SiteResponseDriver<'a> {
    /// Allocates a new instance
    pub fn new(config: &'a Config) -> Self {
        SiteResponseDriver { config }
    }

    /// Returns the default frequencies (Hz) used for transfer functions
    pub fn default_freqs(&self) -> Result<Vector, Error> {
        logspace(
            self.config.freq_exp_range.0,
            self.config.freq_exp_range.1,
            self.config.n_freq,
        )
    }

    /// Calculates the acceleration transfer function from the base outcrop to the surface outcrop
    ///
    /// # Input
    ///
    /// * `calc` -- the linear calculator
    /// * `profile` -- the discretized profile; the last slice is the base
    /// * `freqs` -- frequencies (Hz); the default frequencies are used if None
    ///
    /// # Output
    ///
    /// Returns `(freqs, values)`.
    pub fn transfer_function<C>(
        &self,
        calc: &C,
        profile: &Profile,
        freqs: Option<&[f64]>,
    ) -> Result<(Vector, Vec<Complex64>), Error>
    where
        C: LinearCalculator,
    {
        let freqs = match freqs {
            Some(f) => Vector::from(&f.to_vec()),
            None => self.default_freqs()?,
        };
        let motion = Motion::Frequencies {
            freqs: freqs.as_data().clone(),
        };
        let input = Location::outcrop_at_index(-1);
        let output = Location::outcrop_at_index(0);
        let values = calc.transfer_function(&motion, profile, &input, &output)?;
        Ok((freqs, values))
    }

    /// Runs an equivalent-linear analysis and returns the strain-compatible profile
    ///
    /// The soil profile is discretized with a unit increment for every layer. The motion
    /// accelerations are converted to units of g and applied at the outcrop located at the
    /// base of the soil profile. The output has one constant-damping slice per discretized
    /// slice, with the converged velocity, damping, unit weight and thickness.
    pub fn strain_compatible_profile<E>(
        &self,
        engine: &mut E,
        soil_profile: &SoilProfile,
        motion: &Motion,
    ) -> Result<Profile, Error>
    where
        E: EquivalentLinearEngine,
    {
        let increments = vec![STRAIN_COMPATIBLE_INCREMENT; soil_profile.n_layers()];
        let profile = ProfileDiscretizer::new(self.config).discretize(soil_profile, Some(&increments))?;
        let motion_g = motion.scaled(1.0 / self.config.gravity);
        let input = Location::outcrop_at_depth(soil_profile.height());
        log::info!(
            "running equivalent-linear analysis: {} slices, input at {:.2} m",
            profile.n_slices(),
            soil_profile.height()
        );
        engine.run(&motion_g, &profile, &input)?;
        let mut slices = Vec::with_capacity(profile.n_slices());
        for slice in &profile.slices {
            let state = engine.layer_state(&Location {
                wave: Wave::Within,
                at: At::Depth(slice.depth),
            })?;
            slices.push(DiscretizedSlice::linear(
                STRAIN_COMPATIBLE_SOIL_NAME,
                slice.depth,
                state.thickness,
                state.unit_wt,
                state.unit_wt / self.config.gravity,
                state.shear_vel,
                state.damping,
                slice.layer,
            ));
        }
        Ok(Profile::new(slices, soil_profile.gwl()))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
