use crate::tools::log_message_and_return;
use crate::web::error::Result;
use crate::web::error::WebError::CantCreateClient;
use reqwest::Client;
use std::time::Duration;

pub fn build_client(timeout: Duration) -> Result<Client> {
    reqwest::ClientBuilder::new()
        .cookie_store(true)
        .timeout(timeout)
        .build()
        .map_err(log_message_and_return(
            "Can't build HTTP client.",
            CantCreateClient,
        ))
}
