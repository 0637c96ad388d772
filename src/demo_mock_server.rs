use log::info;
use std::sync::OnceLock;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub static LOOKUP_MOCK_SERVER_URI: OnceLock<String> = OnceLock::new();
pub const LOOKUP_PATH: &str = "/msa/MbrDtlMain.php";

const ERROR_PAGE: &str = "<html><body><font color=#ff0000><b>Error: Could not retrieve data for this member.</b></font></body></html>";

pub async fn init_demo() {
    let mock_server = MockServer::start().await;
    LOOKUP_MOCK_SERVER_URI.get_or_init(|| mock_server.uri());

    let members = [
        ("12345678", "JANE DOE", "1500 (12)", "NY", "2099-01-01"),
        ("87654321", "JOHN DOE", "1800 (40)", "CA", "2020-06-30"),
        ("11223344", "ALICE BOB", "Unrated", "TX", "2099-01-01"),
    ];
    for (member_id, name, regular_rating, state, expiration_date) in members {
        let header = format!("{member_id}: {name}");
        mock_member_page(
            &mock_server,
            member_id,
            &header,
            regular_rating,
            state,
            expiration_date,
        )
        .await;
    }
    Mock::given(method("GET"))
        .and(path(LOOKUP_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(ERROR_PAGE))
        .mount(&mock_server)
        .await;

    info!("Demo member pages served from {}", mock_server.uri());
    // The mock server stops when dropped: keep it for the whole process.
    std::mem::forget(mock_server);
}

async fn mock_member_page(
    mock_server: &MockServer,
    member_id: &'static str,
    header: &str,
    regular_rating: &str,
    state: &str,
    expiration_date: &str,
) {
    let body = format!(
        r#"<html><body><table width=750><tr><td>
<font size=+1><b>{header}</b></font>
<table border=0 cellspacing=0 cellpadding=3>
<tr><td>Regular Rating</td><td><b>{regular_rating}</b></td></tr>
<tr><td>Quick Rating</td><td><b>Unrated</b></td></tr>
<tr><td>Blitz Rating</td><td><b>Unrated</b></td></tr>
<tr><td>State</td><td><b>State
{state}</b></td></tr>
<tr><td>Expiration Dt.</td><td><b>{expiration_date}</b></td></tr>
</table>
</td></tr></table></body></html>"#
    );

    Mock::given(method("GET"))
        .and(path(LOOKUP_PATH))
        .and(move |request: &Request| request.url.query() == Some(member_id))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .with_priority(1)
        .mount(mock_server)
        .await;
}
