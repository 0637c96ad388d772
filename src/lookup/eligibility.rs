use dto::eligibility::{EligibilityResult, Reason};
use dto::member_record::{MemberRecord, is_absent};
use dto::membership_status::MembershipStatus;

/// Decide whether the member found on the page may play.
/// Rules are checked in order, the first matching one gives the verdict.
/// State, quick and blitz ratings never prevent eligibility.
pub fn evaluate(
    requested_id: &str,
    record: &MemberRecord,
    status: &MembershipStatus,
) -> EligibilityResult {
    if is_absent(record.player_id()) {
        EligibilityResult::ineligible(Reason::PlayerNotFound)
    } else if *status.expired() {
        EligibilityResult::ineligible(Reason::PlayerExpired)
    } else if requested_id.trim() != record.player_id() {
        EligibilityResult::ineligible(Reason::PlayerInvalid)
    } else if is_absent(record.player_name())
        || is_absent(record.regular_rating())
        || is_absent(record.expiration_date())
    {
        EligibilityResult::ineligible(Reason::PlayerInsufficientInfo)
    } else {
        EligibilityResult::valid()
    }
}
