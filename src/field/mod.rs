//! Implements readers of field investigation data

mod cpt_file;
pub use crate::field::cpt_file::*;
