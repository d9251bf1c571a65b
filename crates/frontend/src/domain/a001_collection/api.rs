use contracts::domain::a001_collection::{Collection, CollectionDto, CollectionId};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, ensure_ok, id_segment};
use crate::shared::session::Session;

pub async fn fetch_collections(session: &Session) -> Result<Vec<Collection>, String> {
    let response = session
        .authorize(Request::get(&api_url("/api/collections")))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    ensure_ok(response, "load collections")
        .await?
        .json::<Vec<Collection>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// The API has no slug lookup; the list is fetched and searched
pub async fn fetch_collection_by_slug(session: &Session, slug: &str) -> Result<Collection, String> {
    let collections = fetch_collections(session).await?;
    find_by_slug(collections, slug).ok_or_else(|| format!("Collection not found: {}", slug))
}

pub fn find_by_slug(collections: Vec<Collection>, slug: &str) -> Option<Collection> {
    collections.into_iter().find(|c| c.slug == slug)
}

pub async fn create_collection(session: &Session, dto: &CollectionDto) -> Result<Collection, String> {
    let response = session
        .authorize(Request::post(&api_url("/api/collections")))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    ensure_ok(response, "create the collection")
        .await?
        .json::<Collection>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn update_collection(
    session: &Session,
    id: CollectionId,
    dto: &CollectionDto,
) -> Result<Collection, String> {
    let url = api_url(&format!("/api/collections/{}", id_segment(&id)));
    let response = session
        .authorize(Request::put(&url))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    ensure_ok(response, "update the collection")
        .await?
        .json::<Collection>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete_collection(session: &Session, id: CollectionId) -> Result<(), String> {
    let url = api_url(&format!("/api/collections/{}", id_segment(&id)));
    let response = session
        .authorize(Request::delete(&url))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    ensure_ok(response, "delete the collection").await?;
    Ok(())
}
