//! The capability set every authentication variant implements.

use tracing::info;

/// Steps of an authentication attempt, as implemented by one variant.
///
/// Three methods are hooks with empty defaults, one has a default
/// placeholder, and [`server_authentication`](Self::server_authentication)
/// has no default at all. Running the steps is not part of this trait: see
/// [`Authenticate`](crate::Authenticate) and
/// [`run_authentication`](crate::run_authentication).
///
/// # Example
///
/// ```
/// use auth_flow::{Authenticate, AuthenticationProcess};
///
/// struct SmartCard;
///
/// impl AuthenticationProcess for SmartCard {
///     fn local_authentication(&self) {
///         tracing::info!("reading card");
///     }
///
///     fn server_authentication(&self) {
///         tracing::info!("presenting card certificate");
///     }
/// }
///
/// SmartCard.authenticate();
/// ```
///
/// A type without `server_authentication` is not a variant:
///
/// ```compile_fail
/// use auth_flow::AuthenticationProcess;
///
/// struct Incomplete;
///
/// impl AuthenticationProcess for Incomplete {
///     fn local_authentication(&self) {}
/// }
/// ```
pub trait AuthenticationProcess {
    /// Name recorded on the `authenticate` span. Defaults to the type name.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Hook. Check whether the device has the hardware this variant needs.
    fn check_device_capability(&self) {}

    /// Hook. Check whether the user has enrolled on this device.
    fn check_device_eligibility(&self) {}

    /// Hook. Verify the user on the device itself.
    fn local_authentication(&self) {}

    /// Check that the authentication service is reachable.
    fn internet_connectivity_check(&self) {
        info!("checking internet connectivity");
    }

    /// Authenticate against the server.
    fn server_authentication(&self);
}

impl<P: AuthenticationProcess + ?Sized> AuthenticationProcess for &P {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn check_device_capability(&self) {
        (**self).check_device_capability()
    }

    fn check_device_eligibility(&self) {
        (**self).check_device_eligibility()
    }

    fn local_authentication(&self) {
        (**self).local_authentication()
    }

    fn internet_connectivity_check(&self) {
        (**self).internet_connectivity_check()
    }

    fn server_authentication(&self) {
        (**self).server_authentication()
    }
}

impl<P: AuthenticationProcess + ?Sized> AuthenticationProcess for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn check_device_capability(&self) {
        (**self).check_device_capability()
    }

    fn check_device_eligibility(&self) {
        (**self).check_device_eligibility()
    }

    fn local_authentication(&self) {
        (**self).local_authentication()
    }

    fn internet_connectivity_check(&self) {
        (**self).internet_connectivity_check()
    }

    fn server_authentication(&self) {
        (**self).server_authentication()
    }
}
