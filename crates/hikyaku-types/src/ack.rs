//! Command acknowledgments and their classification.
//!
//! The backend answers every command with a single `Ack` whose `status`
//! carries exactly one of three outcome fields. Classification fails closed:
//! a status with zero or several fields present is a protocol violation and
//! is never resolved by picking a branch.

use serde::Deserialize;
use serde_json::Value;

/// The single reply received per sent command.
#[derive(Clone, Debug, Deserialize)]
pub struct Ack {
    pub status: AckStatus,
}

/// The raw outcome fields as they appear on the wire.
///
/// At most one of the three should be present; [`AckStatus::outcome`]
/// enforces that.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AckStatus {
    #[serde(default)]
    pub ok: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub rejection: Option<Value>,
}

/// A classified acknowledgment.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The command was accepted; carries no detail payload.
    Ok,
    /// The command failed at the backend; carries the error detail.
    Error(Value),
    /// A business rule refused the command; carries the rejection detail.
    Rejection(Value),
}

/// An acknowledgment that violates the exactly-one-outcome contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AckError {
    #[error("acknowledgment status carries no outcome field")]
    NoOutcome,
    #[error("acknowledgment status carries {0} outcome fields, expected exactly one")]
    ConflictingOutcomes(usize),
}

impl AckStatus {
    /// Classify into exactly one [`Outcome`], failing closed otherwise.
    pub fn outcome(self) -> Result<Outcome, AckError> {
        match (self.ok, self.error, self.rejection) {
            (Some(_), None, None) => Ok(Outcome::Ok),
            (None, Some(detail), None) => Ok(Outcome::Error(detail)),
            (None, None, Some(detail)) => Ok(Outcome::Rejection(detail)),
            (None, None, None) => Err(AckError::NoOutcome),
            (ok, error, rejection) => {
                let present = [ok.is_some(), error.is_some(), rejection.is_some()]
                    .into_iter()
                    .filter(|p| *p)
                    .count();
                Err(AckError::ConflictingOutcomes(present))
            }
        }
    }
}

impl Ack {
    /// Classify this acknowledgment's status.
    pub fn outcome(self) -> Result<Outcome, AckError> {
        self.status.outcome()
    }
}

// ============================================================================
// Tests
// ============================================================================
