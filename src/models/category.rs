//! Category model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::{pagination::PageMeta, trim_in_place};

pub const CATEGORY_SORT_FIELDS: &[(&str, &str)] = &[("name", "name"), ("createdAt", "created_at")];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    pub description: Option<String>,
}

impl CreateCategory {
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.name);
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCategory {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}

impl UpdateCategory {
    pub fn normalize(&mut self) {
        if let Some(name) = self.name.as_mut() {
            trim_in_place(name);
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryPage {
    pub categories: Vec<Category>,
    #[serde(flatten)]
    pub meta: PageMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_name_is_blank() {
        let mut category: CreateCategory = serde_json::from_str(r#"{"name": "   "}"#).unwrap();
        category.normalize();
        assert!(category.validate().is_err());

        let mut patch: UpdateCategory = serde_json::from_str(r#"{"name": " Poetry "}"#).unwrap();
        patch.normalize();
        assert_eq!(patch.name.as_deref(), Some("Poetry"));
        assert!(patch.validate().is_ok());
    }
}
