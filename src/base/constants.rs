/// Defines the default gravity acceleration (m/s²)
pub const GRAVITY: f64 = 9.8;

/// Defines the default unit weight of water (N/m³)
pub const UNIT_WATER_WEIGHT: f64 = 9800.0;

/// Defines the default atmospheric pressure (Pa)
pub const P_ATM: f64 = 101_000.0;

/// Converts pressures from Pa to kPa
pub const PA_TO_KPA: f64 = 0.001;

/// Converts pressures from kPa to atmospheres (as used by the Darendeli correlations)
pub const KPA_TO_ATM: f64 = 1.0 / 101.325;

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/liqsra/test";
