use contracts::domain::a001_collection::CollectionId;
use contracts::domain::a002_item::{Item, ItemCreateRequest, ItemId, ItemUpdateRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, ensure_ok, id_segment};
use crate::shared::session::Session;

fn item_url(collection_id: CollectionId, item_id: &ItemId) -> String {
    api_url(&format!(
        "/api/items/{}/{}",
        id_segment(&collection_id),
        id_segment(item_id)
    ))
}

/// Every item of a collection; the item store is rebuilt from this after each mutation
pub async fn fetch_items(session: &Session, collection_id: CollectionId) -> Result<Vec<Item>, String> {
    let url = api_url(&format!("/api/items?collection_id={}", collection_id));
    let response = session
        .authorize(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    ensure_ok(response, "load items")
        .await?
        .json::<Vec<Item>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_item(
    session: &Session,
    collection_id: CollectionId,
    item_id: &ItemId,
) -> Result<Item, String> {
    let response = session
        .authorize(Request::get(&item_url(collection_id, item_id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    ensure_ok(response, "load the item")
        .await?
        .json::<Item>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_item(session: &Session, request: &ItemCreateRequest) -> Result<Item, String> {
    let response = session
        .authorize(Request::post(&api_url("/api/items")))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    ensure_ok(response, "create the item")
        .await?
        .json::<Item>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Full replace: `request.metadata` must be the complete map
pub async fn update_item(
    session: &Session,
    collection_id: CollectionId,
    item_id: &ItemId,
    request: &ItemUpdateRequest,
) -> Result<Item, String> {
    let response = session
        .authorize(Request::put(&item_url(collection_id, item_id)))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    ensure_ok(response, "update the item")
        .await?
        .json::<Item>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// The API answers 204 without a body
pub async fn delete_item(
    session: &Session,
    collection_id: CollectionId,
    item_id: &ItemId,
) -> Result<(), String> {
    let response = session
        .authorize(Request::delete(&item_url(collection_id, item_id)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    ensure_ok(response, "delete the item").await?;
    Ok(())
}
