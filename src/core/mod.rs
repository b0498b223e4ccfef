//! Core data structures for Bosun.
//!
//! Foundational value types shared by the pipelines: resolved build
//! parameters and the derived directory layout.

pub mod layout;
pub mod params;

pub use layout::PathSet;
pub use params::{BuildConfig, BuildParams, BuildTarget, ParamError};
