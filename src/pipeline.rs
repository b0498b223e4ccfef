//! Phase sequencing with fail-fast semantics.
//!
//! A pipeline is a fixed ordered sequence of named phases. Each phase runs
//! to completion before the next starts; the first failure stops the
//! pipeline. Nothing is rolled back -- directories and artifacts created by
//! completed phases stay on disk for inspection and re-invocation.

use anyhow::{bail, Result};

use crate::util::process::ExecError;

/// A named pipeline step.
pub trait Phase {
    /// Name used in progress and failure messages.
    fn name(&self) -> &'static str;

    /// Run the step to completion.
    fn run(&self) -> Result<()>;
}

/// Record of one executed phase.
#[derive(Debug, Clone)]
pub struct PhaseOutcome {
    pub phase: &'static str,
    pub succeeded: bool,
    /// Exit code of the failing tool, when it ran at all.
    pub exit_code: Option<i32>,
    pub diagnostic: Option<String>,
}

impl PhaseOutcome {
    fn success(phase: &'static str) -> Self {
        PhaseOutcome {
            phase,
            succeeded: true,
            exit_code: None,
            diagnostic: None,
        }
    }

    fn failure(phase: &'static str, err: &anyhow::Error) -> Self {
        PhaseOutcome {
            phase,
            succeeded: false,
            exit_code: err.downcast_ref::<ExecError>().and_then(ExecError::exit_code),
            diagnostic: Some(format!("{:#}", err)),
        }
    }
}

/// An ordered sequence of phases.
#[derive(Default)]
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

/// Outcomes of one pipeline invocation, in execution order.
///
/// On failure the failing phase is the last entry; phases after it were
/// never started.
#[derive(Debug)]
pub struct PipelineRun {
    pub outcomes: Vec<PhaseOutcome>,
}

impl Pipeline {
    pub fn new() -> Self {
        Pipeline { phases: Vec::new() }
    }

    /// Append a phase.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run every phase in order, stopping at the first failure.
    pub fn run(&self) -> PipelineRun {
        let mut outcomes = Vec::new();

        for phase in &self.phases {
            let outcome = match phase.run() {
                Ok(()) => PhaseOutcome::success(phase.name()),
                Err(err) => PhaseOutcome::failure(phase.name(), &err),
            };
            let succeeded = outcome.succeeded;
            outcomes.push(outcome);
            if !succeeded {
                break;
            }
        }

        PipelineRun { outcomes }
    }
}

impl PipelineRun {
    /// The failing phase, if any.
    pub fn failure(&self) -> Option<&PhaseOutcome> {
        self.outcomes.iter().find(|o| !o.succeeded)
    }

    /// Convert to a `Result`, surfacing the failing phase by name.
    pub fn into_result(self) -> Result<Vec<PhaseOutcome>> {
        if let Some(fail) = self.failure() {
            bail!(
                "{} phase failed: {}",
                fail.phase,
                fail.diagnostic.as_deref().unwrap_or("unknown error")
            );
        }
        Ok(self.outcomes)
    }
}
