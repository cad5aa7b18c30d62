//! Cucumber Studio API model types.

mod envelope;
mod params;
mod resource;

pub use envelope::*;
pub use params::*;
pub use resource::*;
