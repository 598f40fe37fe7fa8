//! Implements site-response calculations: motions, propagation engines, and the driver

mod driver;
mod engine;
mod linear_elastic;
mod motion;
pub use crate::sra::driver::*;
pub use crate::sra::engine::*;
pub use crate::sra::linear_elastic::*;
pub use crate::sra::motion::*;
