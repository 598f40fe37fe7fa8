//! Implements the base structures: errors, configuration, parameters, and constants

mod auxiliary;
mod config;
mod constants;
mod enums;
mod errors;
mod parameters;
mod samples;
pub use crate::base::auxiliary::*;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::enums::*;
pub use crate::base::errors::*;
pub use crate::base::parameters::*;
pub use crate::base::samples::*;
