#[cfg(test)]
use std::cell::RefCell;
#[cfg(not(test))]
use std::env;
use log::warn;
use std::fmt::Debug;
use std::str::FromStr;

/// Retrieve the value passed to the app as `--name=value`.
/// The first arg matching any of `arg_names` wins.
///
/// To test a function relying on this, wrap it with `with_env_args(args, fn)`.
pub fn retrieve_arg_value(arg_names: &[&str]) -> Option<String> {
    get_env_args().into_iter().find_map(|arg| {
        arg_names.iter().find_map(|arg_name| {
            arg.strip_prefix(arg_name)
                .and_then(|rest| rest.strip_prefix('='))
                .map(str::to_owned)
        })
    })
}

/// Retrieve and parse an arg value.
/// Fall back to `default` when the arg is missing or can't be parsed.
pub fn retrieve_parsed_arg_value<T>(arg_names: &[&str], default: T) -> T
where
    T: FromStr,
    T::Err: Debug,
{
    match retrieve_arg_value(arg_names) {
        None => default,
        Some(value) => match value.parse::<T>() {
            Ok(value) => value,
            Err(e) => {
                warn!("Ignoring invalid value for {arg_names:?} [value: {value}, error: {e:?}]");
                default
            }
        },
    }
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    env::args().collect()
}

#[cfg(test)]
thread_local! {
    /// Args seen by the app while running tests.
    /// Set through `with_env_args`, then reset to its previous state.
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };
}

#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|vec| vec.borrow().clone())
}

#[cfg(test)]
/// Run `function` as if `args` had been passed to the app.
pub fn with_env_args<F, T>(args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    ENV_ARGS.with(|refcell| {
        let old_value = refcell.replace(args);
        let result = function();
        refcell.replace(old_value);
        result
    })
}

#[cfg(test)]
pub mod tests {
    use crate::tools::env_args::{retrieve_arg_value, retrieve_parsed_arg_value, with_env_args};
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        args = {vec!["--port=8080".to_owned()], vec!["-p=8080".to_owned()], vec!["--portable=true".to_owned()], vec!["--other=8080".to_owned()], vec![]},
        expected_result = {Some("8080".to_owned()), Some("8080".to_owned()), None, None, None}
    )]
    fn should_retrieve_arg_value(args: Vec<String>, expected_result: Option<String>) {
        let result = with_env_args(args, || retrieve_arg_value(&["-p", "--port"]));
        assert_eq!(expected_result, result);
    }

    #[test]
    fn should_keep_equal_signs_in_value() {
        let args = vec!["--lookup-url=http://localhost/page.php?a=b".to_owned()];

        let result = with_env_args(args, || retrieve_arg_value(&["--lookup-url"]));

        assert_eq!(Some("http://localhost/page.php?a=b".to_owned()), result);
    }

    #[parameterized(
        args = {vec!["--timeout=10".to_owned()], vec!["--timeout=ten".to_owned()], vec!["--timeout=".to_owned()], vec![]},
        expected_result = {10, 30, 30, 30}
    )]
    fn should_retrieve_parsed_arg_value(args: Vec<String>, expected_result: u64) {
        let result = with_env_args(args, || retrieve_parsed_arg_value(&["--timeout"], 30_u64));
        assert_eq!(expected_result, result);
    }
}
