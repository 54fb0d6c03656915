//! Category endpoints

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        category::{Category, CategoryPage, CreateCategory, UpdateCategory},
        pagination::ListQuery,
    },
    AppState,
};

use super::{AppJson, AppPath, AppQuery, MessageResponse};

/// List categories with search, sorting and pagination
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    params(ListQuery),
    responses(
        (status = 200, description = "One page of categories", body = CategoryPage),
        (status = 400, description = "Page out of range or invalid parameters", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListQuery>,
) -> AppResult<Json<CategoryPage>> {
    let page = state.services.categories.search(&query).await?;
    Ok(Json(page))
}

/// List every category
#[utoipa::path(
    get,
    path = "/categories/all",
    tag = "categories",
    responses(
        (status = 200, description = "All categories", body = Vec<Category>),
        (status = 404, description = "No categories", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_all_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = state.services.categories.list_all().await?;
    Ok(Json(categories))
}

/// Get category by ID
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = Category),
        (status = 404, description = "Category not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<Category>> {
    let category = state.services.categories.get_by_id(id).await?;
    Ok(Json(category))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    request_body = CreateCategory,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 409, description = "Name already taken", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    AppJson(data): AppJson<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = state.services.categories.create(data).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Update a category
#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = Uuid, Path, description = "Category ID")),
    request_body = UpdateCategory,
    responses(
        (status = 200, description = "Category updated", body = Category),
        (status = 404, description = "Category not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(data): AppJson<UpdateCategory>,
) -> AppResult<Json<Category>> {
    let category = state.services.categories.update(id, data).await?;
    Ok(Json(category))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted", body = MessageResponse),
        (status = 404, description = "Category not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.services.categories.delete(id).await?;
    Ok(Json(MessageResponse::new("Category deleted")))
}
