//! The five steps of an authentication attempt.

use std::fmt;

use serde::Serialize;

/// One step of the authentication template.
///
/// The declaration order matches [`AuthStep::ORDER`], which is the order the
/// template runs them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStep {
    /// Hook: does the device support this kind of authentication at all?
    DeviceCapability,

    /// Hook: has the user enrolled for it on this device?
    DeviceEligibility,

    /// Hook: on-device verification (biometric match, etc.)
    LocalAuthentication,

    /// Reachability of the authentication service. Has a default.
    InternetConnectivity,

    /// Authentication service call. Every variant must supply this.
    ServerAuthentication,
}

impl AuthStep {
    /// Fixed execution order of one `authenticate()` call.
    pub const ORDER: [AuthStep; 5] = [
        AuthStep::DeviceCapability,
        AuthStep::DeviceEligibility,
        AuthStep::LocalAuthentication,
        AuthStep::InternetConnectivity,
        AuthStep::ServerAuthentication,
    ];

    /// Stable snake_case name, used in log fields and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthStep::DeviceCapability => "device_capability",
            AuthStep::DeviceEligibility => "device_eligibility",
            AuthStep::LocalAuthentication => "local_authentication",
            AuthStep::InternetConnectivity => "internet_connectivity",
            AuthStep::ServerAuthentication => "server_authentication",
        }
    }

    /// True for the steps whose default behavior is a no-op.
    pub fn is_hook(&self) -> bool {
        matches!(
            self,
            AuthStep::DeviceCapability | AuthStep::DeviceEligibility | AuthStep::LocalAuthentication
        )
    }

    /// 1-based position within [`AuthStep::ORDER`].
    pub fn position(&self) -> usize {
        *self as usize + 1
    }
}

impl fmt::Display for AuthStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
