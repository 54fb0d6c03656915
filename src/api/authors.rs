//! Author endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        author::{Author, AuthorPage, CreateAuthor, UpdateAuthor},
        pagination::ListQuery,
    },
    AppState,
};

use super::{AppJson, AppPath, AppQuery};

/// Acknowledgment of an author deletion
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDeleted {
    pub message: String,
    /// Books moved to the placeholder author
    pub reassigned_books: u64,
    /// Author that now owns those books
    pub placeholder_id: Uuid,
}

/// List authors with search, sorting and pagination
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    params(ListQuery),
    responses(
        (status = 200, description = "One page of authors", body = AuthorPage),
        (status = 400, description = "Page out of range or invalid parameters", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_authors(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListQuery>,
) -> AppResult<Json<AuthorPage>> {
    let page = state.services.authors.search(&query).await?;
    Ok(Json(page))
}

/// List every author
#[utoipa::path(
    get,
    path = "/authors/all",
    tag = "authors",
    responses(
        (status = 200, description = "All authors", body = Vec<Author>),
        (status = 404, description = "No authors", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_all_authors(State(state): State<AppState>) -> AppResult<Json<Vec<Author>>> {
    let authors = state.services.authors.list_all().await?;
    Ok(Json(authors))
}

/// Get author by ID
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = Uuid, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author details", body = Author),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<Author>> {
    let author = state.services.authors.get_by_id(id).await?;
    Ok(Json(author))
}

/// Create an author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = CreateAuthor,
    responses(
        (status = 201, description = "Author created", body = Author),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 409, description = "Name already taken", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    AppJson(data): AppJson<CreateAuthor>,
) -> AppResult<(StatusCode, Json<Author>)> {
    let author = state.services.authors.create(data).await?;
    Ok((StatusCode::CREATED, Json(author)))
}

/// Update an author
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = Uuid, Path, description = "Author ID")),
    request_body = UpdateAuthor,
    responses(
        (status = 200, description = "Author updated", body = Author),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(data): AppJson<UpdateAuthor>,
) -> AppResult<Json<Author>> {
    let author = state.services.authors.update(id, data).await?;
    Ok(Json(author))
}

/// Delete an author, moving its books to the placeholder author
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = Uuid, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author deleted", body = AuthorDeleted),
        (status = 400, description = "The placeholder author cannot be deleted", body = crate::error::ErrorResponse),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<Json<AuthorDeleted>> {
    let removal = state.services.authors.delete(id).await?;
    Ok(Json(AuthorDeleted {
        message: "Author deleted".to_string(),
        reassigned_books: removal.reassigned_books,
        placeholder_id: removal.placeholder_id,
    }))
}
