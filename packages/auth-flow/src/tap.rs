//! Step taps - observe the template run without influencing it.
//!
//! A tap is told about every step after that step returns. It has no way to
//! skip, reorder, or abort anything: `on_step` returns `()` and the template
//! calls the next step regardless.
//!
//! # Example
//!
//! ```
//! use auth_flow::{run_authentication, AuthStep, PinAuthentication, RecordingTap};
//!
//! let mut tap = RecordingTap::new();
//! run_authentication(&PinAuthentication, &mut tap);
//!
//! assert_eq!(tap.steps(), &AuthStep::ORDER);
//! ```

use crate::step::AuthStep;

/// Observer of completed steps.
pub trait StepTap {
    /// Called once per step, after the step has run.
    fn on_step(&mut self, step: AuthStep);
}

/// Tap that ignores everything. Used by plain `authenticate()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTap;

impl StepTap for NoopTap {
    fn on_step(&mut self, _step: AuthStep) {}
}

/// Tap that remembers every step it sees, in order.
///
/// Reusing one recorder across several runs concatenates their sequences.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingTap {
    steps: Vec<AuthStep>,
}

impl RecordingTap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps observed so far.
    pub fn steps(&self) -> &[AuthStep] {
        &self.steps
    }

    /// Observed steps split into complete runs.
    pub fn runs(&self) -> impl Iterator<Item = &[AuthStep]> {
        self.steps.chunks(AuthStep::ORDER.len())
    }

    pub fn into_steps(self) -> Vec<AuthStep> {
        self.steps
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }
}

impl StepTap for RecordingTap {
    fn on_step(&mut self, step: AuthStep) {
        self.steps.push(step);
    }
}

impl<F> StepTap for F
where
    F: FnMut(AuthStep),
{
    fn on_step(&mut self, step: AuthStep) {
        self(step)
    }
}
