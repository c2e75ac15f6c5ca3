//! Errors for selecting authentication methods.
//!
//! Running a flow never fails. These only come from turning user input
//! (CLI flags, environment) into [`AuthMethod`](crate::AuthMethod)s.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthFlowError {
    #[error("unknown authentication method: {0:?} (expected pin, touch-id or face-id)")]
    UnknownMethod(String),

    #[error("no authentication methods given")]
    EmptyMethodList,
}
