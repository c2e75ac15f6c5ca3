//! # Auth Flow
//!
//! A fixed authentication sequence with per-variant steps.
//!
//! ## Core Concepts
//!
//! - [`AuthenticationProcess`] = the steps a variant provides
//! - [`Authenticate`] = the sequence that runs them (not overridable)
//! - [`StepTap`] = observers of a running sequence
//!
//! ## Sequence
//!
//! ```text
//! authenticate()
//!     │
//!     ├─► check_device_capability()      hook, default no-op
//!     ├─► check_device_eligibility()     hook, default no-op
//!     ├─► local_authentication()         hook, default no-op
//!     ├─► internet_connectivity_check()  default placeholder
//!     └─► server_authentication()        required
//! ```
//!
//! Every call runs all five steps exactly once, in this order. No step can
//! stop the sequence and no variant can change it.
//!
//! ## Example
//!
//! ```
//! use auth_flow::{Authenticate, AuthMethod, ClientAppAuthentication, TouchIdAuthentication};
//!
//! // Direct call on a concrete variant
//! TouchIdAuthentication.authenticate();
//!
//! // Through the driver, by name
//! let process = "face-id".parse::<AuthMethod>().unwrap().process();
//! ClientAppAuthentication::authenticate(process.as_ref());
//! ```
//!
//! ## Built-in Variants
//!
//! | Variant | Overrides |
//! |---------|-----------|
//! | [`PinAuthentication`] | server authentication |
//! | [`TouchIdAuthentication`] | capability, eligibility, local auth, server authentication |
//! | [`FaceIdAuthentication`] | capability, eligibility, local auth, server authentication |

mod client;
mod error;
mod method;
mod process;
mod step;
mod tap;
mod template;
mod variants;

pub use client::ClientAppAuthentication;
pub use error::AuthFlowError;
pub use method::AuthMethod;
pub use process::AuthenticationProcess;
pub use step::AuthStep;
pub use tap::{NoopTap, RecordingTap, StepTap};
pub use template::{run_authentication, Authenticate};
pub use variants::{FaceIdAuthentication, PinAuthentication, TouchIdAuthentication};
