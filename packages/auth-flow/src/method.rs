//! Selecting a built-in variant by name.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::AuthFlowError;
use crate::process::AuthenticationProcess;
use crate::variants::{FaceIdAuthentication, PinAuthentication, TouchIdAuthentication};

/// Name of a built-in authentication variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthMethod {
    Pin,
    TouchId,
    FaceId,
}

impl AuthMethod {
    pub const ALL: [AuthMethod; 3] = [AuthMethod::Pin, AuthMethod::TouchId, AuthMethod::FaceId];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMethod::Pin => "pin",
            AuthMethod::TouchId => "touch-id",
            AuthMethod::FaceId => "face-id",
        }
    }

    /// Construct the variant this name stands for.
    pub fn process(self) -> Box<dyn AuthenticationProcess> {
        match self {
            AuthMethod::Pin => Box::new(PinAuthentication),
            AuthMethod::TouchId => Box::new(TouchIdAuthentication),
            AuthMethod::FaceId => Box::new(FaceIdAuthentication),
        }
    }

    /// Parse a comma separated list such as `"pin, face-id"`.
    ///
    /// Blank entries are skipped. Duplicates are kept, so `"pin,pin"` runs PIN
    /// twice.
    pub fn parse_list(input: &str) -> Result<Vec<AuthMethod>, AuthFlowError> {
        let methods = input
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::parse::<AuthMethod>)
            .collect::<Result<Vec<_>, _>>()?;

        if methods.is_empty() {
            return Err(AuthFlowError::EmptyMethodList);
        }

        Ok(methods)
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthMethod {
    type Err = AuthFlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pin" => Ok(AuthMethod::Pin),
            "touch-id" | "touch_id" | "touchid" | "touch" => Ok(AuthMethod::TouchId),
            "face-id" | "face_id" | "faceid" | "face" => Ok(AuthMethod::FaceId),
            _ => Err(AuthFlowError::UnknownMethod(s.trim().to_string())),
        }
    }
}
