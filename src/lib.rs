//! Bosun - a build orchestrator for CMake + Ninja projects
//!
//! Bosun sits in front of a project-file generator (CMake) and a build
//! executor (Ninja). From a handful of user-chosen parameters it derives a
//! deterministic directory layout beside the project checkout and drives
//! three fixed pipelines over it:
//!
//! - **build**: generate project files, then build, for a chosen
//!   configuration and target;
//! - **install**: release build plus artifact and documentation
//!   installation;
//! - **examples**: build the bundled example projects against the
//!   installed artifacts.
//!
//! Phases run strictly in order and fail fast: the first non-zero exit of
//! an external tool aborts the remaining phases, leaving completed state
//! on disk for inspection and re-invocation.

pub mod builder;
pub mod core;
pub mod ops;
pub mod pipeline;
pub mod util;

pub use crate::core::layout::PathSet;
pub use crate::core::params::{BuildConfig, BuildParams, BuildTarget, ParamError};
pub use crate::pipeline::{Phase, PhaseOutcome, Pipeline, PipelineRun};
pub use crate::util::process::{ExecError, ProcessBuilder};
