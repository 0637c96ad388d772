use log::error;
use std::fmt::Debug;

pub mod env_args;
pub mod web;

/// Log the error and return `value_to_return`.
/// Meant to be used in `map_err` chains.
pub fn log_error_and_return<E: Debug, T>(value_to_return: T) -> impl FnOnce(E) -> T {
    |e| {
        error!("{e:#?}");
        value_to_return
    }
}

/// Log the message followed by the error, then return `value_to_return`.
pub fn log_message_and_return<E: Debug, T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}

#[cfg(test)]
mod tests {
    use crate::tools::{log_error_and_return, log_message_and_return};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn should_log_error_and_return_value() {
        init();

        let expected_return_value = "test";
        let result = log_error_and_return(expected_return_value)("This is an error.");

        assert_eq!(expected_return_value, result);
    }

    #[test]
    fn should_log_message_and_return_value() {
        init();

        let expected_message = "This is a test message";
        let expected_return_value = "This is a test return value";
        let result =
            log_message_and_return(expected_message, expected_return_value)("This is an error.");

        assert_eq!(expected_return_value, result);
    }
}
