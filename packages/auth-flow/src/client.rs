//! Client-side entry point.

use crate::process::AuthenticationProcess;
use crate::tap::StepTap;
use crate::template::{run_authentication, Authenticate};

/// App-level driver. Only ever sees the capability set, never the concrete
/// variant, and passes the sequence through untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClientAppAuthentication;

impl ClientAppAuthentication {
    pub fn authenticate(process: &dyn AuthenticationProcess) {
        process.authenticate();
    }

    /// Same as [`authenticate`](Self::authenticate), reporting each step to `tap`.
    pub fn authenticate_with_tap(process: &dyn AuthenticationProcess, tap: &mut dyn StepTap) {
        run_authentication(process, tap);
    }
}
