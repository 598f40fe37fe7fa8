//! Soil-profile discretization, stress-dependent soil models, and site-response driving
//!
//! The crate converts layered soil profiles into slices with resolved stiffness and
//! nonlinear curve types, calibrates stress-dependent shear-modulus models, and drives
//! linear and equivalent-linear site-response calculations.

pub mod base;
pub mod field;
pub mod models;
pub mod prelude;
pub mod profile;
pub mod sra;

pub use crate::base::Error;
