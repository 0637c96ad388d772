use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Why a member is (or isn't) eligible.
/// Serialized as snake_case codes downstream consumers branch on.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    PlayerNotFound,
    PlayerExpired,
    PlayerInvalid,
    PlayerInsufficientInfo,
    PlayerValid,
    PlayerMissingId,
    Error,
}

#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Hash, Clone, Copy)]
pub struct EligibilityResult {
    eligible: bool,
    reason: Reason,
}

impl EligibilityResult {
    pub fn valid() -> Self {
        Self {
            eligible: true,
            reason: Reason::PlayerValid,
        }
    }

    pub fn ineligible(reason: Reason) -> Self {
        Self {
            eligible: false,
            reason,
        }
    }
}
