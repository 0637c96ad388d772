pub mod eligibility;
pub mod lookup_result;
pub mod member_record;
pub mod membership_status;
