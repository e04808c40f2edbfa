use utoipa::OpenApi;
use crate::models::*;

/// Welcome message
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Static welcome message", body = MessageResponse)
    )
)]
#[allow(dead_code)]
pub async fn root_doc() {}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// Readiness check endpoint
#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Service is ready", body = ReadyResponse),
        (status = 500, description = "Item store unavailable", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn ready_check_doc() {}

/// List all items
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    responses(
        (status = 200, description = "All items in insertion order", body = [Item])
    )
)]
#[allow(dead_code)]
pub async fn list_items_doc() {}

/// Fetch an item by id
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    params(("id" = u64, Path, description = "Item id")),
    responses(
        (status = 200, description = "The item", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Id is not an integer", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn get_item_doc() {}

/// Create a new item
#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created successfully", body = Item),
        (status = 422, description = "Malformed item payload", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn create_item_doc() {}

/// Replace an existing item
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "items",
    params(("id" = u64, Path, description = "Item id")),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Malformed item payload", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn update_item_doc() {}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "items",
    params(("id" = u64, Path, description = "Item id")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn delete_item_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        root_doc,
        health_check_doc,
        ready_check_doc,
        list_items_doc,
        get_item_doc,
        create_item_doc,
        update_item_doc,
        delete_item_doc,
    ),
    components(
        schemas(
            MessageResponse,
            HealthResponse,
            ReadyResponse,
            Item,
            CreateItemRequest,
            UpdateItemRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "items", description = "Item CRUD endpoints")
    )
)]
pub struct ApiDoc;
