use liqsra::prelude::*;
use russell_lab::approx_eq;

// Discretization of a single-layer profile
//
// TEST GOAL
//
// This test verifies the slice count, slice thickness, and resolved properties of a
// single 10 m layer discretized with the default increment.
//
// PROFILE
//
// ```text
//  0.0 m  ──────────────────── surface
//           sand, G = 40 MPa
//  4.0 m  ─ ─ ─ ─ ─ ─ ─ ─ ─ ─  groundwater
//
// 10.0 m  ──────────────────── base
// ```
//
// CONFIGURATION AND PARAMETERS
//
// Default configuration (increment = 1.0, gravity = 9.8)
// Dry unit weight = 17 kN/m³; saturated unit weight = 20 kN/m³; damping = 3%

#[test]
fn test_discretize_single_layer() -> Result<(), Error> {
    // profile
    let layer = SoilLayer::new("sand", 10.0, 17_000.0, 20_000.0, 40e6).with_damping(0.03);
    let soil_profile = SoilProfile::new(vec![layer], 4.0, 9800.0)?;

    // discretize
    let config = Config::new();
    let profile = ProfileDiscretizer::new(&config).discretize(&soil_profile, None)?;

    // the last layer gets one extra slice
    assert_eq!(profile.n_slices(), 11);
    let h = 10.0 / 11.0;
    let mut total = 0.0;
    for (j, slice) in profile.slices.iter().enumerate() {
        approx_eq(slice.thickness, h, 1e-15);
        approx_eq(slice.depth, (j as f64) * h, 1e-13);
        let bottom = ((j + 1) as f64) * h;
        let unit_wt = if bottom <= 4.0 { 17_000.0 } else { 20_000.0 };
        assert_eq!(slice.unit_wt, unit_wt);
        approx_eq(slice.density, unit_wt / 9.8, 1e-12);
        assert_eq!(slice.g_mod, 40e6);
        approx_eq(slice.shear_vel, f64::sqrt(40e6 / slice.density), 1e-10);
        assert_eq!(slice.damping, 0.03);
        assert_eq!(slice.soil_type.name(), "sand");
        total += slice.thickness;
    }
    approx_eq(total, 10.0, 1e-12);

    // write and read back
    let path = format!("{}/test_discretize_single_layer.json", DEFAULT_TEST_DIR);
    profile.write_json(&path)?;
    let read = Profile::read_json(&path)?;
    assert_eq!(read.n_slices(), 11);
    assert_eq!(read.gwl, 4.0);
    Ok(())
}
