use derive_getters::Getters;
use std::str::FromStr;
use std::time::Duration;

/// What to do when the member page can't be retrieved.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum ErrorPolicy {
    /// Answer with an `error` lookup result.
    #[default]
    Absorb,
    /// Answer with an explicit failure.
    Fail,
}

impl FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "absorb" => Ok(ErrorPolicy::Absorb),
            "fail" => Ok(ErrorPolicy::Fail),
            other => Err(format!("Unknown error policy: {other}")),
        }
    }
}

#[derive(Debug, Getters)]
pub struct LookupConfig {
    lookup_url: String,
    error_policy: ErrorPolicy,
    timeout: Duration,
}

impl LookupConfig {
    pub fn new(lookup_url: String, error_policy: ErrorPolicy, timeout: Duration) -> Self {
        Self {
            lookup_url,
            error_policy,
            timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        value = {"absorb", "fail", " FAIL ", "Absorb"},
        expected_result = {ErrorPolicy::Absorb, ErrorPolicy::Fail, ErrorPolicy::Fail, ErrorPolicy::Absorb}
    )]
    fn should_parse_error_policy(value: &str, expected_result: ErrorPolicy) {
        assert_eq!(Ok(expected_result), value.parse::<ErrorPolicy>());
    }

    #[test]
    fn should_not_parse_unknown_error_policy() {
        assert!("throw".parse::<ErrorPolicy>().is_err());
    }
}
