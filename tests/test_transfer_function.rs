use liqsra::prelude::*;
use russell_lab::approx_eq;

// Linear transfer function of a soil layer over an elastic half-space
//
// TEST GOAL
//
// This test verifies the transfer function computed by the driver with the linear elastic
// calculator against the closed-form amplification at the fundamental frequency.
//
// PROFILE
//
// ```text
//  0 m  ──────────────────── surface
//         soil: vs = 180 m/s, ρ = 1750 kg/m³
// 24 m  ────────────────────
//         rock: vs = 760 m/s, ρ = 2250 kg/m³ (half-space)
// ```
//
// CONFIGURATION AND PARAMETERS
//
// No damping. At f = vs/(4H) the amplification is 1/α with α = ρ₁vs₁/(ρ₂vs₂).

#[test]
fn test_transfer_function() -> Result<(), Error> {
    // profile: soil discretized by the discretizer, rock appended as a single slice
    let config = Config::new();
    let rho_soil = 1750.0;
    let rho_rock = 2250.0;
    let g_soil = rho_soil * 180.0 * 180.0;
    let g_rock = rho_rock * 760.0 * 760.0;
    let soil = SoilLayer::new("soil", 24.0, rho_soil * 9.8, rho_soil * 9.8, g_soil);
    let rock = SoilLayer::new("rock", 0.5, rho_rock * 9.8, rho_rock * 9.8, g_rock);
    let sp = SoilProfile::new(vec![soil, rock], 0.0, 9800.0)?;
    let profile = ProfileDiscretizer::new(&config).discretize(&sp, Some(&[2.0, 1.0]))?;
    // the thin rock layer yields one slice plus the extra base slice
    assert_eq!(profile.n_slices(), 12 + 2);

    // default frequencies
    let driver = SiteResponseDriver::new(&config);
    let calc = LinearElasticCalculator::new();
    let (freqs, values) = driver.transfer_function(&calc, &profile, None)?;
    assert_eq!(freqs.dim(), 200);
    assert_eq!(values.len(), 200);
    approx_eq(values[0].norm(), 1.0, 0.1);

    // fundamental frequency
    let f0 = 180.0 / (4.0 * 24.0);
    let (_, values) = driver.transfer_function(&calc, &profile, Some(&[f0]))?;
    let alpha = (rho_soil * 180.0) / (rho_rock * 760.0);
    approx_eq(values[0].norm(), 1.0 / alpha, 1e-8);

    // below the second mode, the peak of the default curve lies next to the fundamental frequency
    let (freqs, values) = driver.transfer_function(&calc, &profile, None)?;
    let mut i_max = 0;
    for i in 0..values.len() {
        if freqs[i] < 2.0 * f0 && values[i].norm() > values[i_max].norm() {
            i_max = i;
        }
    }
    assert!(f64::abs(freqs[i_max] - f0) / f0 < 0.05);
    Ok(())
}
