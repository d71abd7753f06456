//! Replay error handling

use thiserror::Error;

use domain_claims::ClaimError;

/// Errors raised while loading or replaying a workflow script
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Invalid script: {0}")]
    Script(#[from] serde_json::Error),

    #[error("Step {step}: no claim was submitted at position {submission}")]
    UnknownSubmission { step: usize, submission: usize },

    #[error("Step {step}: {source}")]
    Step {
        step: usize,
        #[source]
        source: ClaimError,
    },

    #[error("Claim error: {0}")]
    Claim(#[from] ClaimError),
}

impl ReplayError {
    /// Attaches the failing step number to a claim error
    pub fn at_step(step: usize) -> impl FnOnce(ClaimError) -> ReplayError {
        move |source| ReplayError::Step { step, source }
    }
}
