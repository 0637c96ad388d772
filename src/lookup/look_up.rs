use crate::error::Result;
use crate::lookup::config::ErrorPolicy;
use crate::lookup::eligibility::evaluate;
use crate::lookup::error::LookupError::BatchTooLarge;
use crate::lookup::extract::extract;
use crate::lookup::retrieve::PageRetriever;
use dto::eligibility::Reason;
use dto::lookup_result::LookupResult;
use dto::membership_status::compute_current_membership_status;
use log::{debug, error};
use rocket::futures::future::join_all;

/// Maximum number of members that can be looked up at once.
pub const MAX_BATCH_SIZE: usize = 5;

/// Look a member up and decide whether they're eligible.
///
/// A missing or blank id is answered without retrieving anything.
/// When the member page can't be retrieved, `error_policy` decides
/// whether an `error` result is returned or the failure is propagated.
pub async fn look_member_up<R: PageRetriever>(
    retriever: &R,
    requested_id: Option<&str>,
    error_policy: ErrorPolicy,
) -> Result<LookupResult> {
    let requested_id = match requested_id.map(str::trim) {
        Some(requested_id) if !requested_id.is_empty() => requested_id,
        _ => {
            debug!("Can't look up member without id.");
            return Ok(LookupResult::failed(Reason::PlayerMissingId));
        }
    };

    let page_content = match retriever.retrieve(requested_id).await {
        Ok(page_content) => page_content,
        Err(e) => {
            return match error_policy {
                ErrorPolicy::Absorb => {
                    error!("Member lookup failed [id: {requested_id}]\n{e:#?}");
                    Ok(LookupResult::failed(Reason::Error))
                }
                ErrorPolicy::Fail => Err(e),
            };
        }
    };

    let record = extract(&page_content);
    let status = compute_current_membership_status(record.expiration_date());
    let eligibility = evaluate(requested_id, &record, &status);
    debug!("Member looked up [id: {requested_id}, eligibility: {eligibility:?}]");

    Ok(LookupResult::new(
        Some(requested_id.to_owned()),
        eligibility,
        record,
    ))
}

/// Look up each member of a comma-separated list of ids.
/// Lookups run concurrently; results keep the order of the ids.
pub async fn look_members_up<R: PageRetriever>(
    retriever: &R,
    member_ids: &str,
    error_policy: ErrorPolicy,
) -> Result<Vec<LookupResult>> {
    let member_ids = member_ids.split(',').map(str::trim).collect::<Vec<_>>();
    if member_ids.len() > MAX_BATCH_SIZE {
        return Err(BatchTooLarge {
            max: MAX_BATCH_SIZE,
            requested: member_ids.len(),
        }
        .into());
    }

    join_all(
        member_ids
            .into_iter()
            .map(|member_id| look_member_up(retriever, Some(member_id), error_policy)),
    )
    .await
    .into_iter()
    .collect()
}
