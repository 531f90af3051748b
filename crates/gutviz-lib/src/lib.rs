// gutviz-lib: shared library for preparing gut metabolic gene cluster
// annotations for the visualization front-end.

pub mod classification;
pub mod errors;
pub mod features;
pub mod json;
pub mod logger;
pub mod seq;
