//! Item CRUD handlers.
//!
//! Each public handler is a thin boundary: it runs the matching `*_impl`
//! pipeline and turns any [`ApiError`] into a logged, classified response
//! through [`AppError`].

use axum::{
    body::Bytes,
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use itemstore_core::error::ApiError;
use itemstore_core::expression::build;
use itemstore_core::identifier::generate_id;
use itemstore_core::pagination::{decode_cursor, encode_cursor, parse_limit};
use itemstore_core::schema::validate;
use itemstore_core::storage::StoreKey;

use crate::{handlers::AppError, state::AppState};

/// Query parameters for listing items.
#[derive(Debug, Deserialize)]
pub struct ListItemsQuery {
    /// Page size; falls back to the configured default when unusable.
    pub limit: Option<String>,
    /// Cursor returned by the previous page.
    #[serde(rename = "lastEvaluatedKey")]
    pub last_evaluated_key: Option<String>,
}

/// Decode a request body into a JSON object.
fn parse_body(body: &[u8]) -> Result<Map<String, Value>, ApiError> {
    let text = std::str::from_utf8(body).map_err(|e| ApiError::MalformedBody(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(ApiError::MissingBody);
    }

    match serde_json::from_str(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ApiError::MalformedBody("expected a JSON object".to_string())),
        Err(e) => Err(ApiError::MalformedBody(e.to_string())),
    }
}

/// Pull the item identifier out of the path.
fn extract_id(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    match path {
        Ok(Path(id)) if !id.trim().is_empty() => Ok(id),
        _ => Err(ApiError::MissingId),
    }
}

// ============================================================================
// Create Item
// ============================================================================

/// Create a new item (POST /items).
pub async fn create_item(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), AppError> {
    create_item_impl(&state, &body)
        .await
        .map_err(AppError::in_handler("create_item"))
}

async fn create_item_impl(
    state: &AppState,
    body: &[u8],
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let raw = parse_body(body)?;
    tracing::debug!(handler = "create_item", item = ?raw, "Parsed item");

    let id = generate_id(&state.config.id_prefix);
    tracing::debug!(handler = "create_item", id = %id, "Generated id");

    let record = validate(&state.schemas.create, &raw, Some(&id))?;
    let item = record.into_map();

    state.repo.put(&item).await?;
    tracing::info!(handler = "create_item", id = %id, "Created item");

    Ok((StatusCode::CREATED, Json(json!({ "item": item }))))
}

// ============================================================================
// List Items
// ============================================================================

/// List a page of items (GET /items?limit&lastEvaluatedKey).
pub async fn list_items(
    State(state): State<AppState>,
    query: Result<Query<ListItemsQuery>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    list_items_impl(&state, query)
        .await
        .map_err(AppError::in_handler("list_items"))
}

async fn list_items_impl(
    state: &AppState,
    query: Result<Query<ListItemsQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::MalformedQuery(e.body_text()))?;

    let limit = parse_limit(query.limit.as_deref(), state.config.default_page_limit);
    let start = decode_cursor(query.last_evaluated_key.as_deref(), &state.schemas.key)?;
    tracing::debug!(handler = "list_items", limit, start = ?start, "Scanning items");

    let page = state.repo.scan(limit, start.as_ref()).await?;
    tracing::debug!(
        handler = "list_items",
        count = page.items.len(),
        truncated = page.last_evaluated_key.is_some(),
        "Scanned items"
    );

    Ok(Json(json!({
        "items": page.items,
        "lastEvaluatedKey": page.last_evaluated_key.as_ref().map(encode_cursor),
    })))
}

// ============================================================================
// Read Item
// ============================================================================

/// Get a single item by ID (GET /items/{id}).
pub async fn read_item(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    read_item_impl(&state, path)
        .await
        .map_err(AppError::in_handler("read_item"))
}

async fn read_item_impl(
    state: &AppState,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let id = extract_id(path)?;

    let item = state
        .repo
        .get(&StoreKey::for_id(&id))
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::debug!(handler = "read_item", id = %id, "Found item");

    Ok(Json(json!({ "body": item })))
}

// ============================================================================
// Update Item
// ============================================================================

/// Update some fields of an item (PUT /items/{id}).
pub async fn update_item(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    update_item_impl(&state, path, &body)
        .await
        .map_err(AppError::in_handler("update_item"))
}

async fn update_item_impl(
    state: &AppState,
    path: Result<Path<String>, PathRejection>,
    body: &[u8],
) -> Result<Json<Value>, ApiError> {
    let id = extract_id(path)?;

    let raw = parse_body(body)?;
    tracing::debug!(handler = "update_item", id = %id, item = ?raw, "Parsed item");

    let record = validate(&state.schemas.update, &raw, None)?;

    let expression = build(&record, &id);
    if expression.is_empty() {
        return Err(ApiError::EmptyUpdate);
    }
    tracing::debug!(
        handler = "update_item",
        id = %id,
        expression = %expression.expression(),
        "Built update expression"
    );

    let item = state.repo.update(&expression).await?;
    tracing::info!(handler = "update_item", id = %id, "Updated item");

    Ok(Json(json!({ "item": item })))
}

// ============================================================================
// Delete Item
// ============================================================================

/// Delete an item by ID (DELETE /items/{id}).
pub async fn delete_item(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    delete_item_impl(&state, path)
        .await
        .map_err(AppError::in_handler("delete_item"))
}

async fn delete_item_impl(
    state: &AppState,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let id = extract_id(path)?;

    state.repo.delete(&StoreKey::for_id(&id)).await?;
    tracing::info!(handler = "delete_item", id = %id, "Deleted item");

    Ok(Json(json!({ "message": "Item deleted successfully" })))
}
