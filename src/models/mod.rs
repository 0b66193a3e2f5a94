//! Data models

pub mod artifact;
pub mod features;
pub mod regressor;
pub mod scaler;

pub use artifact::*;
pub use features::*;
pub use regressor::*;
pub use scaler::*;
