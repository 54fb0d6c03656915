//! Listing parameters shared by every paginated collection

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    config::PaginationConfig,
    error::{AppError, AppResult},
};

/// Query parameters accepted by the paginated listing endpoints
#[derive(Debug, Default, Clone, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Case-insensitive substring filter
    pub search: Option<String>,
    /// 1-based page number (default: 1)
    pub page: Option<i64>,
    /// Page size
    pub limit: Option<i64>,
    /// Sort field; unknown fields disable sorting
    pub sort_by: Option<String>,
    /// `asc` or `desc` (default: desc)
    pub order: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Only the literal `desc` sorts descending
    pub fn parse(order: Option<&str>) -> Self {
        match order {
            None | Some("desc") => SortOrder::Desc,
            Some(_) => SortOrder::Asc,
        }
    }

    /// Nulls order lowest in either direction
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC NULLS FIRST",
            SortOrder::Desc => "DESC NULLS LAST",
        }
    }
}

/// Whitelisted sort column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub column: &'static str,
    pub order: SortOrder,
}

impl Sort {
    /// Resolve `sortBy` against `(public name, column)` pairs.
    pub fn resolve(
        sort_by: Option<&str>,
        default_field: &str,
        order: Option<&str>,
        allowed: &[(&str, &'static str)],
    ) -> Option<Sort> {
        let field = sort_by.unwrap_or(default_field);
        allowed
            .iter()
            .find(|(name, _)| *name == field)
            .map(|&(_, column)| Sort {
                column,
                order: SortOrder::parse(order),
            })
    }
}

/// Validated page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    pub fn new(page: Option<i64>, limit: Option<i64>, config: &PaginationConfig) -> AppResult<Self> {
        let page = page.unwrap_or(1);
        let limit = limit.unwrap_or(config.default_limit);

        if limit < 1 || limit > config.max_limit {
            return Err(AppError::BadRequest(format!(
                "limit must be between 1 and {}",
                config.max_limit
            )));
        }
        // A window that cannot be addressed is past the end of any collection
        if page < 1 || (page - 1).checked_mul(limit).is_none() {
            return Err(AppError::BadRequest(format!("Page {} is out of range", page)));
        }

        Ok(Self { page, limit })
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }

    pub fn total_pages(&self, total: i64) -> i64 {
        (total + self.limit - 1) / self.limit
    }

    /// Pages past the end are rejected, including page 1 of an empty result.
    pub fn ensure_in_range(&self, total: i64) -> AppResult<PageMeta> {
        let total_pages = self.total_pages(total);
        if self.page > total_pages {
            return Err(AppError::BadRequest(format!(
                "Page {} is out of range ({} pages available)",
                self.page, total_pages
            )));
        }
        Ok(PageMeta {
            total_pages,
            current_page: self.page,
            total_documents: total,
        })
    }
}

/// Filter, order and window handed to the repositories
#[derive(Debug, Clone)]
pub struct ListParams {
    /// ILIKE pattern, already escaped
    pub pattern: Option<String>,
    pub sort: Option<Sort>,
    pub limit: i64,
    pub offset: i64,
}

impl ListParams {
    pub fn new(search: Option<&str>, sort: Option<Sort>, page: &PageRequest) -> Self {
        Self {
            pattern: search.filter(|s| !s.is_empty()).map(like_pattern),
            sort,
            limit: page.limit,
            offset: page.offset(),
        }
    }
}

/// Pagination metadata returned next to each page
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_pages: i64,
    pub current_page: i64,
    pub total_documents: i64,
}

/// Build a substring ILIKE pattern, escaping LIKE metacharacters
pub fn like_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
