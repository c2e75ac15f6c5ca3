//! The fixed authentication sequence.
//!
//! The sequence lives outside [`AuthenticationProcess`] so that no variant can
//! replace it. [`Authenticate`] is implemented once, for every process, and
//! coherence rejects any second impl:
//!
//! ```compile_fail
//! use auth_flow::{Authenticate, AuthenticationProcess};
//!
//! struct Shortcut;
//!
//! impl AuthenticationProcess for Shortcut {
//!     fn server_authentication(&self) {}
//! }
//!
//! impl Authenticate for Shortcut {
//!     fn authenticate(&self) {}
//! }
//! ```

use tracing::{debug, debug_span, info_span};

use crate::process::AuthenticationProcess;
use crate::step::AuthStep;
use crate::tap::{NoopTap, StepTap};

/// Runs every step of `process` once, in [`AuthStep::ORDER`].
///
/// `tap` is notified after each step. No step can end the run early.
pub fn run_authentication<P, T>(process: &P, tap: &mut T)
where
    P: AuthenticationProcess + ?Sized,
    T: StepTap + ?Sized,
{
    let span = info_span!("authenticate", process = process.name());
    let _entered = span.enter();

    debug!("authentication started");

    for step in AuthStep::ORDER {
        let step_span = debug_span!("auth_step", step = %step);
        let _step_entered = step_span.enter();

        run_step(process, step);
        tap.on_step(step);
    }

    debug!("authentication completed");
}

fn run_step<P>(process: &P, step: AuthStep)
where
    P: AuthenticationProcess + ?Sized,
{
    match step {
        AuthStep::DeviceCapability => process.check_device_capability(),
        AuthStep::DeviceEligibility => process.check_device_eligibility(),
        AuthStep::LocalAuthentication => process.local_authentication(),
        AuthStep::InternetConnectivity => process.internet_connectivity_check(),
        AuthStep::ServerAuthentication => process.server_authentication(),
    }
}

/// The template method.
///
/// Blanket-implemented for every [`AuthenticationProcess`], trait objects
/// included. It cannot be implemented by hand.
pub trait Authenticate: AuthenticationProcess {
    /// Run the full authentication sequence.
    fn authenticate(&self);
}

impl<P: AuthenticationProcess + ?Sized> Authenticate for P {
    fn authenticate(&self) {
        run_authentication(self, &mut NoopTap);
    }
}
