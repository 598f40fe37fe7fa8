//! Implements soil profiles, their discretization into slices, and per-depth updates

mod discretized;
mod discretizer;
mod soil_layer;
mod soil_profile;
mod soil_type;
mod updater;
pub use crate::profile::discretized::*;
pub use crate::profile::discretizer::*;
pub use crate::profile::soil_layer::*;
pub use crate::profile::soil_profile::*;
pub use crate::profile::soil_type::*;
pub use crate::profile::updater::*;
