//! Built-in authentication variants.
//!
//! Each one only emits log events; nothing touches real hardware or the
//! network.

use tracing::info;

use crate::process::AuthenticationProcess;

/// PIN entry. Uses every default and only supplies the server call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PinAuthentication;

impl AuthenticationProcess for PinAuthentication {
    fn server_authentication(&self) {
        info!(method = "pin", "calling authentication service");
    }
}

/// Fingerprint (Touch ID).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TouchIdAuthentication;

impl AuthenticationProcess for TouchIdAuthentication {
    fn check_device_capability(&self) {
        info!(method = "touch-id", "checking device for fingerprint sensor");
    }

    fn check_device_eligibility(&self) {
        info!(method = "touch-id", "checking fingerprint enrollment");
    }

    fn local_authentication(&self) {
        info!(method = "touch-id", "verifying fingerprint");
    }

    fn server_authentication(&self) {
        info!(method = "touch-id", "calling authentication service");
    }
}

/// Face recognition (Face ID).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FaceIdAuthentication;

impl AuthenticationProcess for FaceIdAuthentication {
    fn check_device_capability(&self) {
        info!(method = "face-id", "checking device for face recognition camera");
    }

    fn check_device_eligibility(&self) {
        info!(method = "face-id", "checking face enrollment");
    }

    fn local_authentication(&self) {
        info!(method = "face-id", "verifying face");
    }

    fn server_authentication(&self) {
        info!(method = "face-id", "calling authentication service");
    }
}
