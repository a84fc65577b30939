mod cuid_generator;
mod global;

pub use cuid_generator::*;
pub use global::*;
