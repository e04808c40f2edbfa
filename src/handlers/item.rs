use crate::{
    handlers::{ApiError, ItemId, ValidJson},
    models::{CreateItemRequest, Item, UpdateItemRequest},
    store::SharedStore,
};
use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

/// List all items
pub async fn list_items(State(store): State<SharedStore>) -> Result<Json<Vec<Item>>, ApiError> {
    Ok(Json(store.list()?))
}

/// Fetch a single item
pub async fn get_item(
    State(store): State<SharedStore>,
    ItemId(id): ItemId,
) -> Result<Json<Item>, ApiError> {
    Ok(Json(store.get(id)?))
}

/// Create a new item
pub async fn create_item(
    State(store): State<SharedStore>,
    ValidJson(payload): ValidJson<CreateItemRequest>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let item = store.create(payload.into())?;
    info!("Item '{}' created with id {}", item.name, item.id);
    Ok((StatusCode::CREATED, Json(item)))
}

/// Replace an existing item
pub async fn update_item(
    State(store): State<SharedStore>,
    ItemId(id): ItemId,
    ValidJson(payload): ValidJson<UpdateItemRequest>,
) -> Result<Json<Item>, ApiError> {
    let item = store.update(id, payload.into())?;
    info!("Item {} updated", id);
    Ok(Json(item))
}

/// Delete an item
pub async fn delete_item(
    State(store): State<SharedStore>,
    ItemId(id): ItemId,
) -> Result<StatusCode, ApiError> {
    store.delete(id)?;
    info!("Item {} deleted", id);
    Ok(StatusCode::NO_CONTENT)
}
