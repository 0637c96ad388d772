use crate::error::Result;
use crate::lookup::config::LookupConfig;
use crate::tools::web::build_client;
use crate::tools::{log_error_and_return, log_message_and_return};
use crate::web::error::WebError::{CantReadPageContent, ConnectionFailed, UnexpectedStatus};
use log::{debug, error};
use reqwest::Client;
use std::future::Future;

/// Source of member pages.
pub trait PageRetriever {
    /// Retrieve the raw page published for `member_id`.
    fn retrieve(&self, member_id: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Retrieve member pages from the federation website.
/// The member id is passed as the raw query string: `<lookup_url>?<member_id>`.
pub struct HttpPageRetriever {
    client: Client,
    lookup_url: String,
}

impl HttpPageRetriever {
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let client = build_client(*config.timeout())?;
        Ok(Self {
            client,
            lookup_url: config.lookup_url().to_owned(),
        })
    }
}

impl PageRetriever for HttpPageRetriever {
    async fn retrieve(&self, member_id: &str) -> Result<String> {
        let url = format!("{}?{member_id}", self.lookup_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(log_message_and_return(
                "Can't reach member page.",
                ConnectionFailed,
            ))?;

        let status = response.status();
        if !status.is_success() {
            error!("Can't retrieve member page because of status {status} [id: {member_id}]");
            return Err(UnexpectedStatus(status.as_u16()).into());
        }

        let page_content = response
            .text()
            .await
            .map_err(log_error_and_return(CantReadPageContent))?;
        debug!("Member page retrieved [id: {member_id}]");
        Ok(page_content)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::error::ApplicationError;
    use crate::lookup::config::ErrorPolicy;
    use crate::lookup::extract::tests::jane_doe_page;
    use std::collections::HashMap;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    pub const LOOKUP_PATH: &str = "/msa/MbrDtlMain.php";

    /// Retriever serving pages from memory. Unknown ids fail to be retrieved.
    pub struct InMemoryPageRetriever {
        pages: HashMap<String, String>,
    }

    impl InMemoryPageRetriever {
        pub fn new(pages: Vec<(&str, String)>) -> Self {
            Self {
                pages: pages
                    .into_iter()
                    .map(|(id, page)| (id.to_owned(), page))
                    .collect(),
            }
        }
    }

    impl PageRetriever for InMemoryPageRetriever {
        async fn retrieve(&self, member_id: &str) -> Result<String> {
            self.pages
                .get(member_id)
                .cloned()
                .ok_or(ApplicationError::from(ConnectionFailed))
        }
    }

    pub fn lookup_config(mock_server: &MockServer) -> LookupConfig {
        LookupConfig::new(
            format!("{}{LOOKUP_PATH}", mock_server.uri()),
            ErrorPolicy::Absorb,
            Duration::from_secs(5),
        )
    }

    /// Serve `body` for the member page of `member_id`.
    pub async fn mock_member_page(
        mock_server: &MockServer,
        member_id: &str,
        status: u16,
        body: String,
    ) {
        let member_id = member_id.to_owned();
        Mock::given(method("GET"))
            .and(path(LOOKUP_PATH))
            .and(move |request: &Request| request.url.query() == Some(member_id.as_str()))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(mock_server)
            .await;
    }

    #[async_test]
    async fn should_retrieve_member_page() {
        let mock_server = MockServer::start().await;
        mock_member_page(&mock_server, "12345678", 200, jane_doe_page()).await;
        let retriever = HttpPageRetriever::new(&lookup_config(&mock_server)).unwrap();

        let result = retriever.retrieve("12345678").await.unwrap();

        assert_eq!(jane_doe_page(), result);
    }

    #[async_test]
    async fn should_fail_to_retrieve_member_page_on_error_status() {
        let mock_server = MockServer::start().await;
        mock_member_page(&mock_server, "12345678", 500, String::new()).await;
        let retriever = HttpPageRetriever::new(&lookup_config(&mock_server)).unwrap();

        let error = retriever.retrieve("12345678").await.unwrap_err();

        assert_eq!(ApplicationError::from(UnexpectedStatus(500)), error);
    }

    #[async_test]
    async fn should_fail_to_retrieve_member_page_when_unreachable() {
        let config = LookupConfig::new(
            "http://127.0.0.1:1/msa/MbrDtlMain.php".to_owned(),
            ErrorPolicy::Absorb,
            Duration::from_secs(5),
        );
        let retriever = HttpPageRetriever::new(&config).unwrap();

        let error = retriever.retrieve("12345678").await.unwrap_err();

        assert_eq!(ApplicationError::from(ConnectionFailed), error);
    }
}
