use super::{DiscretizedSlice, Profile};

/// Name given to the constant-damping soil types of updated profiles
const UPDATED_SOIL_NAME: &str = "soil";

/// Merges per-depth overrides of damping and shear velocity into a profile
///
/// # Notes
///
/// * The slice depth is looked up with exact equality in the list of depths
/// * Slices whose depth is not in the list keep their current damping and velocity
/// * An override list shorter than `depths` keeps the current value where the matched
///   index has no entry; mismatches never fail
/// * The output has constant-damping soil types; density, unit weight, thickness and
///   depth are kept
pub struct ProfileUpdater;

impl ProfileUpdater {
    /// Returns a new profile with the overrides applied
    ///
    /// # Input
    ///
    /// * `profile` -- the source profile (not modified)
    /// * `depths` -- depths of the overrides
    /// * `damping` -- damping ratios corresponding to `depths`
    /// * `velocities` -- shear velocities corresponding to `depths`
    pub fn apply_overrides(
        profile: &Profile,
        depths: &[f64],
        damping: Option<&[f64]>,
        velocities: Option<&[f64]>,
    ) -> Profile {
        let slices = profile
            .slices
            .iter()
            .map(|slice| {
                let (damp, vel) = match depths.iter().position(|d| *d == slice.depth) {
                    Some(i) => (
                        override_at(damping, i).unwrap_or(slice.damping),
                        override_at(velocities, i).unwrap_or(slice.shear_vel),
                    ),
                    None => (slice.damping, slice.shear_vel),
                };
                DiscretizedSlice::linear(
                    UPDATED_SOIL_NAME,
                    slice.depth,
                    slice.thickness,
                    slice.unit_wt,
                    slice.density,
                    vel,
                    damp,
                    slice.layer,
                )
            })
            .collect();
        Profile::new(slices, profile.gwl)
    }
}

/// Returns the override at a matched index, if the list is given and long enough
fn override_at(values: Option<&[f64]>, index: usize) -> Option<f64> {
    values.and_then(|v| v.get(index).copied())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ProfileUpdater;
    use crate::profile::{DiscretizedSlice, Profile, SoilType};

    fn profile() -> Profile {
        let slices = vec![
            DiscretizedSlice::linear("a", 0.0, 1.0, 18_000.0, 1800.0, 100.0, 0.05, 1),
            DiscretizedSlice::linear("b", 1.0, 1.0, 19_000.0, 1900.0, 150.0, 0.04, 1),
            DiscretizedSlice::linear("c", 2.0, 1.0, 20_000.0, 2000.0, 200.0, 0.03, 2),
        ];
        Profile::new(slices, 1.0)
    }

    #[test]
    fn apply_overrides_works() {
        let original = profile();
        let depths = [0.0, 2.0];
        let updated =
            ProfileUpdater::apply_overrides(&original, &depths, Some(&[0.10, 0.20]), Some(&[120.0, 250.0]));
        assert_eq!(original, profile());
        assert_eq!(updated.n_slices(), 3);
        assert_eq!(updated.gwl, 1.0);
        let dampings: Vec<_> = updated.slices.iter().map(|s| s.damping).collect();
        let velocities: Vec<_> = updated.slices.iter().map(|s| s.shear_vel).collect();
        assert_eq!(dampings, &[0.10, 0.04, 0.20]);
        assert_eq!(velocities, &[120.0, 150.0, 250.0]);
        for (new, old) in updated.slices.iter().zip(original.slices.iter()) {
            assert_eq!(new.depth, old.depth);
            assert_eq!(new.thickness, old.thickness);
            assert_eq!(new.unit_wt, old.unit_wt);
            assert_eq!(new.density, old.density);
            assert_eq!(new.g_mod, new.density * new.shear_vel * new.shear_vel);
            assert_eq!(new.soil_type, SoilType::linear("soil", new.unit_wt, new.damping));
        }
    }

    #[test]
    fn partial_overrides_keep_current_values() {
        let original = profile();
        let updated = ProfileUpdater::apply_overrides(&original, &[1.0], Some(&[0.08]), None);
        assert_eq!(updated.slices[1].damping, 0.08);
        assert_eq!(updated.slices[1].shear_vel, 150.0);
        let updated = ProfileUpdater::apply_overrides(&original, &[1.0], None, Some(&[175.0]));
        assert_eq!(updated.slices[1].damping, 0.04);
        assert_eq!(updated.slices[1].shear_vel, 175.0);
    }

    #[test]
    fn mismatched_depths_are_ignored() {
        let original = profile();
        // 1.0000001 is not exactly equal to any slice depth
        let updated =
            ProfileUpdater::apply_overrides(&original, &[1.0000001, 7.0], Some(&[0.5, 0.5]), Some(&[1.0, 1.0]));
        for (new, old) in updated.slices.iter().zip(original.slices.iter()) {
            assert_eq!(new.damping, old.damping);
            assert_eq!(new.shear_vel, old.shear_vel);
        }
        let updated = ProfileUpdater::apply_overrides(&original, &[], None, None);
        assert_eq!(updated.n_slices(), 3);
    }

    #[test]
    fn short_override_lists_keep_current_values() {
        let original = profile();

        // the unmatched depth 7.0 has no damping entry; it is never read
        let updated = ProfileUpdater::apply_overrides(&original, &[0.0, 7.0], Some(&[0.1]), None);
        assert_eq!(updated.slices[0].damping, 0.1);
        assert_eq!(updated.slices[0].shear_vel, 100.0);

        // matched depths beyond the end of a list keep their current values
        let updated = ProfileUpdater::apply_overrides(&original, &[0.0, 1.0], Some(&[0.1]), Some(&[]));
        assert_eq!(updated.slices[0].damping, 0.1);
        assert_eq!(updated.slices[1].damping, 0.04);
        let velocities: Vec<_> = updated.slices.iter().map(|s| s.shear_vel).collect();
        assert_eq!(velocities, &[100.0, 150.0, 200.0]);
    }
}
