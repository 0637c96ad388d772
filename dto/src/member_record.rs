use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Placeholder stored in any field that couldn't be extracted from the member page.
pub const ABSENT: &str = "--";

/// Facts published on a member page.
/// Every field holds either a scraped value or [ABSENT], never an empty string.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Hash, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    player_name: String,
    player_id: String,
    player_state: String,
    regular_rating: String,
    quick_rating: String,
    blitz_rating: String,
    expiration_date: String,
}

impl MemberRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        player_name: Option<String>,
        player_id: Option<String>,
        player_state: Option<String>,
        regular_rating: Option<String>,
        quick_rating: Option<String>,
        blitz_rating: Option<String>,
        expiration_date: Option<String>,
    ) -> Self {
        Self {
            player_name: or_absent(player_name),
            player_id: or_absent(player_id),
            player_state: or_absent(player_state),
            regular_rating: or_absent(regular_rating),
            quick_rating: or_absent(quick_rating),
            blitz_rating: or_absent(blitz_rating),
            expiration_date: or_absent(expiration_date),
        }
    }

    /// Record with every field set to [ABSENT].
    pub fn absent() -> Self {
        Self::new(None, None, None, None, None, None, None)
    }
}

/// Check whether a field value is the [ABSENT] placeholder.
pub fn is_absent(value: &str) -> bool {
    value == ABSENT
}

fn or_absent(value: Option<String>) -> String {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| ABSENT.to_owned())
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    pub const JANE_DOE_ID: &str = "12345678";

    pub fn jane_doe() -> MemberRecord {
        MemberRecord::new(
            Some("Jane Doe".to_owned()),
            Some(JANE_DOE_ID.to_owned()),
            Some("NY".to_owned()),
            Some("1500".to_owned()),
            Some("1400".to_owned()),
            Some("1300".to_owned()),
            Some("2099-01-01".to_owned()),
        )
    }

    #[test]
    fn should_build_absent_record() {
        let record = MemberRecord::absent();

        for field in [
            record.player_name(),
            record.player_id(),
            record.player_state(),
            record.regular_rating(),
            record.quick_rating(),
            record.blitz_rating(),
            record.expiration_date(),
        ] {
            assert_eq!(ABSENT, field);
        }
    }

    #[parameterized(
        value = {None, Some(""), Some("   "), Some(" NY "), Some("--")},
        expected_result = {ABSENT, ABSENT, ABSENT, "NY", ABSENT}
    )]
    fn should_normalize_field(value: Option<&str>, expected_result: &str) {
        let record = MemberRecord::new(
            None,
            None,
            value.map(str::to_owned),
            None,
            None,
            None,
            None,
        );

        assert_eq!(expected_result, record.player_state());
    }

    #[test]
    fn should_serialize_with_camel_case_fields() {
        let json = serde_json::to_value(jane_doe()).unwrap();

        assert_eq!("Jane Doe", json["playerName"]);
        assert_eq!(JANE_DOE_ID, json["playerId"]);
        assert_eq!("NY", json["playerState"]);
        assert_eq!("1500", json["regularRating"]);
        assert_eq!("1400", json["quickRating"]);
        assert_eq!("1300", json["blitzRating"]);
        assert_eq!("2099-01-01", json["expirationDate"]);
    }
}
