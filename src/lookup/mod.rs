pub mod config;
pub mod eligibility;
pub mod error;
pub mod extract;
pub mod look_up;
pub mod retrieve;

/// Default address of the federation member-detail page.
pub const DEFAULT_LOOKUP_URL: &str = "https://www.uschess.org/msa/MbrDtlMain.php";
