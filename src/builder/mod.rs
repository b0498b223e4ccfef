//! Adapters for the external build tools.
//!
//! Each adapter is a pipeline phase wrapping one invocation of the
//! project-file generator or the build executor. The tools are opaque:
//! this module shapes their command lines and interprets nothing but
//! their exit status.

pub mod cmake;
pub mod docs;
pub mod ninja;

pub use cmake::{ConfigurePhase, InstallPhase};
pub use docs::CopyDocsPhase;
pub use ninja::CompilePhase;
