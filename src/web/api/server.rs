use crate::lookup::DEFAULT_LOOKUP_URL;
use crate::lookup::config::{ErrorPolicy, LookupConfig};
use crate::lookup::retrieve::HttpPageRetriever;
use crate::tools::env_args::{retrieve_arg_value, retrieve_parsed_arg_value};
use crate::web::api::lookup_controller;
use crate::web::server::Server;
use log::{error, info};
use rocket::{Build, Rocket};
use std::time::Duration;

const LOOKUP_URL_ENV_ARG: &str = "--lookup-url";
const ERROR_POLICY_ENV_ARG: &str = "--error-policy";
const TIMEOUT_ENV_ARG: &str = "--timeout";
const DEFAULT_TIMEOUT_IN_SECONDS: u64 = 30;

pub struct ApiServer {}

impl ApiServer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Server for ApiServer {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        let lookup_config = build_lookup_config();
        info!("Members are looked up from {}", lookup_config.lookup_url());
        let retriever = match HttpPageRetriever::new(&lookup_config) {
            Ok(retriever) => retriever,
            Err(error) => {
                error!("{error:#?}");
                panic!("Initialization failed, aborting.");
            }
        };

        rocket_build
            .manage(lookup_config)
            .manage(retriever)
            .mount(
                "/api/",
                routes![lookup_controller::look_up, lookup_controller::health],
            )
    }
}

fn build_lookup_config() -> LookupConfig {
    LookupConfig::new(
        retrieve_arg_value(&[LOOKUP_URL_ENV_ARG]).unwrap_or_else(get_default_lookup_url),
        retrieve_parsed_arg_value(&[ERROR_POLICY_ENV_ARG], ErrorPolicy::default()),
        Duration::from_secs(retrieve_parsed_arg_value(
            &[TIMEOUT_ENV_ARG],
            DEFAULT_TIMEOUT_IN_SECONDS,
        )),
    )
}

#[cfg(not(feature = "demo"))]
fn get_default_lookup_url() -> String {
    DEFAULT_LOOKUP_URL.to_owned()
}

#[cfg(feature = "demo")]
fn get_default_lookup_url() -> String {
    crate::demo_mock_server::LOOKUP_MOCK_SERVER_URI
        .get()
        .map(|uri| format!("{uri}{}", crate::demo_mock_server::LOOKUP_PATH))
        .unwrap_or_else(|| DEFAULT_LOOKUP_URL.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::env_args::with_env_args;

    #[test]
    fn should_build_default_lookup_config() {
        let config = with_env_args(vec![], build_lookup_config);

        assert_eq!(DEFAULT_LOOKUP_URL, config.lookup_url());
        assert_eq!(&ErrorPolicy::Absorb, config.error_policy());
        assert_eq!(&Duration::from_secs(30), config.timeout());
    }

    #[test]
    fn should_build_custom_lookup_config() {
        let args = vec![
            "--lookup-url=http://localhost:1234/lookup.php".to_owned(),
            "--error-policy=fail".to_owned(),
            "--timeout=5".to_owned(),
        ];

        let config = with_env_args(args, build_lookup_config);

        assert_eq!("http://localhost:1234/lookup.php", config.lookup_url());
        assert_eq!(&ErrorPolicy::Fail, config.error_policy());
        assert_eq!(&Duration::from_secs(5), config.timeout());
    }

    #[test]
    fn should_configure_api_server() {
        let rocket = with_env_args(vec![], || ApiServer::new().configure(rocket::build()));

        assert!(rocket.state::<LookupConfig>().is_some());
        assert!(rocket.state::<HttpPageRetriever>().is_some());
    }
}
