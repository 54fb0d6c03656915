//! Author model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::{pagination::PageMeta, trim_in_place};

/// Fields `sortBy` may name, with their column
pub const AUTHOR_SORT_FIELDS: &[(&str, &str)] = &[("name", "name"), ("dateOfBirth", "date_of_birth")];

/// Full author model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub bio: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create author request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthor {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    pub bio: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl CreateAuthor {
    /// Trim the name so length rules apply to what gets stored
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.name);
    }
}

/// Update author request; absent fields are left untouched, `null` clears
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuthor {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub bio: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<NaiveDate>)]
    pub date_of_birth: Option<Option<NaiveDate>>,
}

impl UpdateAuthor {
    pub fn normalize(&mut self) {
        if let Some(name) = self.name.as_mut() {
            trim_in_place(name);
        }
    }
}

/// One page of authors
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthorPage {
    pub authors: Vec<Author>,
    #[serde(flatten)]
    pub meta: PageMeta,
}
