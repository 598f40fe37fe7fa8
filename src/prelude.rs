//! Makes available common structures needed to build and analyze profiles
//!
//! You may write `use liqsra::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{At, Config, CurveFamily, Location, Wave, DEFAULT_TEST_DIR};
pub use crate::base::{ParamModulus, ParamSoilLayer, ParamSoilProfile};
pub use crate::field::Cpt;
pub use crate::models::{ConstitutiveModel, ModelKind};
pub use crate::profile::{Profile, ProfileDiscretizer, ProfileUpdater, SoilLayer, SoilProfile, SoilType};
pub use crate::sra::{EquivalentLinearEngine, LayerState, LinearCalculator, LinearElasticCalculator, Motion};
pub use crate::sra::SiteResponseDriver;
pub use crate::Error;
