//! Category service

use uuid::Uuid;
use validator::Validate;

use crate::{
    config::PaginationConfig,
    error::{AppError, AppResult},
    models::{
        category::{Category, CategoryPage, CreateCategory, UpdateCategory, CATEGORY_SORT_FIELDS},
        pagination::{ListParams, ListQuery, PageRequest, Sort},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CategoriesService {
    repository: Repository,
    pagination: PaginationConfig,
}

impl CategoriesService {
    pub fn new(repository: Repository, pagination: PaginationConfig) -> Self {
        Self {
            repository,
            pagination,
        }
    }

    pub async fn search(&self, query: &ListQuery) -> AppResult<CategoryPage> {
        let page = PageRequest::new(query.page, query.limit, &self.pagination)?;
        let sort = Sort::resolve(
            query.sort_by.as_deref(),
            "name",
            query.order.as_deref(),
            CATEGORY_SORT_FIELDS,
        );
        let params = ListParams::new(query.search.as_deref(), sort, &page);

        let (total, categories) = tokio::try_join!(
            self.repository.categories.count(&params),
            self.repository.categories.list(&params),
        )?;

        let meta = page.ensure_in_range(total)?;
        Ok(CategoryPage { categories, meta })
    }

    pub async fn list_all(&self) -> AppResult<Vec<Category>> {
        let categories = self.repository.categories.list_all().await?;
        if categories.is_empty() {
            return Err(AppError::NotFound("No categories found".to_string()));
        }
        Ok(categories)
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Category> {
        self.repository.categories.get_by_id(id).await
    }

    pub async fn create(&self, mut data: CreateCategory) -> AppResult<Category> {
        data.normalize();
        data.validate()?;
        self.repository.categories.create(&data).await
    }

    pub async fn update(&self, id: Uuid, mut data: UpdateCategory) -> AppResult<Category> {
        data.normalize();
        data.validate()?;
        self.repository.categories.update(id, &data).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.categories.delete(id).await?;
        tracing::info!(category_id = %id, "Category deleted");
        Ok(())
    }
}
