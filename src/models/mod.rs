//! Implements stress-dependent soil models and their parameter bookkeeping

/// Generates the name-based accessors of a parameter set made of `Option<f64>` fields
///
/// Adds `PARAMETERS` (canonical names in declaration order), `slot` (mutable storage), and
/// `value` (current value); unknown names return `None`.
macro_rules! parameter_slots {
    ($ty:ident { $($name:ident),* $(,)? }) => {
        impl $ty {
            /// Canonical names of the parameters accepted by `slot` and `value`
            pub const PARAMETERS: &'static [&'static str] = &[$(stringify!($name)),*];

            /// Returns the storage of a parameter given its canonical name
            pub fn slot(&mut self, name: &str) -> Option<&mut Option<f64>> {
                match name {
                    $(stringify!($name) => Some(&mut self.$name),)*
                    _ => None,
                }
            }

            /// Returns the value of a parameter given its canonical name
            pub fn value(&self, name: &str) -> Option<Option<f64>> {
                match name {
                    $(stringify!($name) => Some(self.$name),)*
                    _ => None,
                }
            }
        }
    };
}

mod constitutive_model;
mod model_pm4sand;
mod model_stress_density;
mod parameter_history;
pub use crate::models::constitutive_model::*;
pub use crate::models::model_pm4sand::*;
pub use crate::models::model_stress_density::*;
pub use crate::models::parameter_history::*;
