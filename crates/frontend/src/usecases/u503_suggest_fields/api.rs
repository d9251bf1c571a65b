use contracts::usecases::u503_suggest_fields::{SuggestFieldsRequest, SuggestFieldsResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, ensure_ok};
use crate::shared::session::Session;

/// Owner only; the provider may take several seconds to answer
pub async fn suggest_fields(
    session: &Session,
    request: &SuggestFieldsRequest,
) -> Result<SuggestFieldsResponse, String> {
    request.validate()?;
    let response = session
        .authorize(Request::post(&api_url("/api/ai/suggest-fields")))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    ensure_ok(response, "suggest fields")
        .await?
        .json::<SuggestFieldsResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
