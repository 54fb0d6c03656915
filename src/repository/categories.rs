//! Categories repository for database operations

use sqlx::{Pool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::push_order_and_window;
use crate::{
    error::{AppError, AppResult},
    models::{
        category::{Category, CreateCategory, UpdateCategory},
        pagination::ListParams,
    },
};

#[derive(Clone)]
pub struct CategoriesRepository {
    pool: Pool<Postgres>,
}

impl CategoriesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, params: &ListParams) {
        if let Some(ref pattern) = params.pattern {
            builder.push(" WHERE name ILIKE ").push_bind(pattern.clone());
        }
    }

    pub async fn count(&self, params: &ListParams) -> AppResult<i64> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM categories");
        Self::push_filter(&mut builder, params);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    pub async fn list(&self, params: &ListParams) -> AppResult<Vec<Category>> {
        let mut builder = QueryBuilder::new("SELECT * FROM categories");
        Self::push_filter(&mut builder, params);
        push_order_and_window(&mut builder, params);

        let categories = builder
            .build_query_as::<Category>()
            .fetch_all(&self.pool)
            .await?;
        Ok(categories)
    }

    pub async fn list_all(&self) -> AppResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY created_at, id")
            .fetch_all(&self.pool)
            .await?;
        Ok(categories)
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Category> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    pub async fn create(&self, data: &CreateCategory) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (id, name, description) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.description)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::BadRequest("Category could not be created, please try again later".to_string()))
    }

    pub async fn update(&self, id: Uuid, data: &UpdateCategory) -> AppResult<Category> {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE categories SET updated_at = NOW()");

        push_set!(builder, &data.name, "name");
        push_set!(builder, &data.description, "description");

        builder.push(" WHERE id = ").push_bind(id).push(" RETURNING *");

        builder
            .build_query_as::<Category>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    /// Delete a category; its books lose the reference (ON DELETE SET NULL)
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }
        Ok(())
    }
}
