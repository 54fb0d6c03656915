//! Book model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::{pagination::PageMeta, trim_in_place};

pub const BOOK_SORT_FIELDS: &[(&str, &str)] = &[
    ("title", "title"),
    ("publishedYear", "published_year"),
    ("price", "price"),
    ("createdAt", "created_at"),
];

/// Book record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    /// Author id
    #[sqlx(rename = "author_id")]
    pub author: Option<Uuid>,
    /// Category id
    #[sqlx(rename = "category_id")]
    pub category: Option<Uuid>,
    pub description: Option<String>,
    pub isbn: Option<String>,
    pub published_year: Option<i32>,
    pub price: Option<f64>,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    #[validate(length(min = 1, max = 500, message = "Title must be between 1 and 500 characters"))]
    pub title: String,
    pub author: Option<Uuid>,
    pub category: Option<Uuid>,
    pub description: Option<String>,
    #[validate(length(min = 10, max = 17, message = "ISBN must be between 10 and 17 characters"))]
    pub isbn: Option<String>,
    pub published_year: Option<i32>,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,
    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: Option<i32>,
}

impl CreateBook {
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.title);
    }
}

/// Update book request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBook {
    #[validate(length(min = 1, max = 500, message = "Title must be between 1 and 500 characters"))]
    pub title: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub author: Option<Option<Uuid>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub category: Option<Option<Uuid>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[validate(length(min = 10, max = 17, message = "ISBN must be between 10 and 17 characters"))]
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub isbn: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub published_year: Option<Option<i32>>,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Option<f64>>,
    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: Option<i32>,
}

impl UpdateBook {
    pub fn normalize(&mut self) {
        if let Some(title) = self.title.as_mut() {
            trim_in_place(title);
        }
    }
}

/// Book listing query: the common listing parameters plus reference filters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Case-insensitive substring match on the title
    pub search: Option<String>,
    /// Only books by this author
    pub author: Option<Uuid>,
    /// Only books in this category
    pub category: Option<Uuid>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    /// title, publishedYear, price or createdAt
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// One page of books
#[derive(Debug, Serialize, ToSchema)]
pub struct BookPage {
    pub books: Vec<Book>,
    #[serde(flatten)]
    pub meta: PageMeta,
}
