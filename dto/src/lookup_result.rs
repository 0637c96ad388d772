use crate::eligibility::{EligibilityResult, Reason};
use crate::member_record::MemberRecord;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Outcome of a single member lookup, as sent to API consumers.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct LookupResult {
    id: Option<String>,
    eligibility: EligibilityResult,
    data: MemberRecord,
}

impl LookupResult {
    pub fn new(id: Option<String>, eligibility: EligibilityResult, data: MemberRecord) -> Self {
        Self {
            id,
            eligibility,
            data,
        }
    }

    /// Result carrying no member data, only a reason.
    pub fn failed(reason: Reason) -> Self {
        Self::new(
            None,
            EligibilityResult::ineligible(reason),
            MemberRecord::absent(),
        )
    }
}
