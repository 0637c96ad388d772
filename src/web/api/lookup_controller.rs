use crate::error::ApplicationError;
use crate::lookup::config::{ErrorPolicy, LookupConfig};
use crate::lookup::look_up::{look_member_up, look_members_up};
use crate::lookup::retrieve::HttpPageRetriever;
use dto::eligibility::Reason;
use log::{debug, error};
use rocket::State;
use rocket::http::Status;
use rocket::response::content::RawJson;
use rocket::serde::json::json;

const AMBIGUOUS_QUERY_MESSAGE: &str = "Provide either memberId or memberIds, but not both.";
const MISSING_ID_MESSAGE: &str = "The member id is missing.";
const LOOKUP_FAILED_MESSAGE: &str = "Couldn't retrieve member data.";

#[derive(FromForm, Debug)]
pub struct LookupQuery {
    #[field(name = "memberId")]
    member_id: Option<String>,
    #[field(name = "memberIds")]
    member_ids: Option<String>,
}

/// Look up a single member (`memberId`) or a comma-separated list of members (`memberIds`).
/// Return a lookup result, or a list of lookup results, as JSON.
#[get("/lookup?<query..>")]
pub async fn look_up(
    query: LookupQuery,
    config: &State<LookupConfig>,
    retriever: &State<HttpPageRetriever>,
) -> Result<RawJson<String>, (Status, String)> {
    let error_policy = *config.error_policy();

    match (query.member_id, query.member_ids) {
        (Some(member_id), None) => {
            let result = look_member_up(retriever.inner(), Some(&member_id), error_policy)
                .await
                .map_err(to_error_response)?;
            if error_policy == ErrorPolicy::Fail
                && *result.eligibility().reason() == Reason::PlayerMissingId
            {
                return Err((Status::BadRequest, MISSING_ID_MESSAGE.to_owned()));
            }
            Ok(RawJson(json!(result).to_string()))
        }
        (None, Some(member_ids)) => {
            let results = look_members_up(retriever.inner(), &member_ids, error_policy)
                .await
                .map_err(to_error_response)?;
            Ok(RawJson(json!(results).to_string()))
        }
        (member_id, member_ids) => {
            debug!(
                "Can't look up members from ambiguous query [memberId: {member_id:?}, memberIds: {member_ids:?}]"
            );
            Err((Status::BadRequest, AMBIGUOUS_QUERY_MESSAGE.to_owned()))
        }
    }
}

#[get("/health")]
pub fn health() -> &'static str {
    "OK"
}

fn to_error_response(error: ApplicationError) -> (Status, String) {
    match error {
        ApplicationError::Lookup(error) => (Status::BadRequest, error.to_string()),
        error => {
            error!("{error:#?}");
            (Status::InternalServerError, LOOKUP_FAILED_MESSAGE.to_owned())
        }
    }
}
