//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::{pagination::PageMeta, trim_in_place};

pub const USER_SORT_FIELDS: &[(&str, &str)] = &[
    ("username", "username"),
    ("email", "email"),
    ("createdAt", "created_at"),
];

/// User record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    /// Unique username
    #[validate(length(min = 3, max = 64, message = "Username must be between 3 and 64 characters"))]
    pub username: String,
    /// Unique email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(max = 255, message = "Full name cannot exceed 255 characters"))]
    pub full_name: Option<String>,
    #[validate(length(max = 32, message = "Phone cannot exceed 32 characters"))]
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl CreateUser {
    /// Trim identifiers so length rules apply to what gets stored
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.username);
        trim_in_place(&mut self.email);
    }
}

/// Update user request
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[validate(length(min = 3, max = 64, message = "Username must be between 3 and 64 characters"))]
    pub username: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[validate(length(max = 255, message = "Full name cannot exceed 255 characters"))]
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub full_name: Option<Option<String>>,
    #[validate(length(max = 32, message = "Phone cannot exceed 32 characters"))]
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub phone: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub address: Option<Option<String>>,
}

impl UpdateUser {
    pub fn normalize(&mut self) {
        if let Some(username) = self.username.as_mut() {
            trim_in_place(username);
        }
        if let Some(email) = self.email.as_mut() {
            trim_in_place(email);
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserPage {
    pub users: Vec<User>,
    #[serde(flatten)]
    pub meta: PageMeta,
}
