//! Access-token policy applied per tool invocation.
//!
//! The policy is deliberately permissive: the observed protocol treats the
//! token as a pass-through field. Absence is accepted and any non-empty token
//! is accepted; only an explicitly supplied empty token is rejected. Real
//! authorization would replace this type, not the call sites.

use crate::lib::errors::ToolError;

/// Result of inspecting the invocation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    Accepted,
    Absent,
    Empty,
}

/// Pluggable token check consulted by the dispatcher on every invocation.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    token: Option<String>,
}

impl AccessPolicy {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    pub fn status(&self) -> TokenStatus {
        match self.token.as_deref() {
            None => TokenStatus::Absent,
            Some(token) if token.trim().is_empty() => TokenStatus::Empty,
            Some(_) => TokenStatus::Accepted,
        }
    }

    /// Check the token and return an `AccessDenied` condition on failure.
    pub fn authorize(&self) -> Result<(), ToolError> {
        match self.status() {
            TokenStatus::Accepted | TokenStatus::Absent => Ok(()),
            TokenStatus::Empty => Err(ToolError::AccessDenied {
                reason: "access token is empty".into(),
            }),
        }
    }
}
