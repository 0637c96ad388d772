use crate::member_record::is_absent;
use chrono::{DateTime, NaiveDate, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%B %d, %Y"];

/// Membership state derived from the published expiration date.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct MembershipStatus {
    expired: bool,
    expires_in_millis: Option<i64>,
}

impl MembershipStatus {
    pub fn new(expired: bool, expires_in_millis: Option<i64>) -> Self {
        Self {
            expired,
            expires_in_millis,
        }
    }

    /// Status of a membership whose expiration date is unknown.
    pub fn unknown() -> Self {
        Self::new(false, None)
    }
}

pub fn compute_current_membership_status(expiration_date: &str) -> MembershipStatus {
    compute_membership_status(expiration_date, Utc::now())
}

/// Compare the expiration date with `now`.
/// The membership expires at midnight UTC of its expiration date.
pub fn compute_membership_status(expiration_date: &str, now: DateTime<Utc>) -> MembershipStatus {
    match parse_expiration_date(expiration_date) {
        None => MembershipStatus::unknown(),
        Some(expiration) => {
            let expiration = expiration.and_hms_opt(0, 0, 0).map(|date| date.and_utc());
            match expiration {
                None => MembershipStatus::unknown(),
                Some(expiration) => MembershipStatus::new(
                    expiration < now,
                    Some((expiration - now).num_milliseconds()),
                ),
            }
        }
    }
}

fn parse_expiration_date(expiration_date: &str) -> Option<NaiveDate> {
    let expiration_date = expiration_date.trim();
    if is_absent(expiration_date) {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(expiration_date, format).ok())
}
