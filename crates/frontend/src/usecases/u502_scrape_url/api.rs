use contracts::domain::a001_collection::CollectionId;
use contracts::usecases::u502_scrape_url::{
    BackendMapping, MappingResponse, SaveMappingRequest, ScrapeUrlRequest, ScrapeUrlResponse,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, ensure_ok};
use crate::shared::session::Session;

/// Raw scraped values of one page; the mapping is applied client-side
pub async fn scrape_url(
    session: &Session,
    collection_id: CollectionId,
    url: &str,
) -> Result<ScrapeUrlResponse, String> {
    let request = ScrapeUrlRequest {
        url: url.trim().to_string(),
        collection_id,
        apply_mapping: false,
    };
    let response = session
        .authorize(Request::post(&api_url("/api/scraper/scrape-url")))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    ensure_ok(response, "scrape the URL")
        .await?
        .json::<ScrapeUrlResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Saved mapping of a collection; empty when none was saved
pub async fn get_mapping(session: &Session, collection_id: CollectionId) -> Result<BackendMapping, String> {
    let url = api_url(&format!("/api/scraper/get-mapping/{}", collection_id));
    let response = session
        .authorize(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    let body = ensure_ok(response, "load the field mapping")
        .await?
        .json::<MappingResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(body.backend_mapping())
}

pub async fn save_mapping(
    session: &Session,
    collection_id: CollectionId,
    mapping: BackendMapping,
) -> Result<(), String> {
    let request = SaveMappingRequest {
        collection_id,
        mapping,
        ignore_unmapped: true,
    };
    let response = session
        .authorize(Request::post(&api_url("/api/scraper/save-mapping")))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    ensure_ok(response, "save the field mapping").await?;
    Ok(())
}
