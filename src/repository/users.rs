//! Users repository for database operations

use sqlx::{Pool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::push_order_and_window;
use crate::{
    error::{AppError, AppResult},
    models::{
        pagination::ListParams,
        user::{CreateUser, UpdateUser, User},
    },
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, params: &ListParams) {
        if let Some(ref pattern) = params.pattern {
            builder
                .push(" WHERE (username ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR email ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR full_name ILIKE ")
                .push_bind(pattern.clone())
                .push(")");
        }
    }

    /// Count users matching the listing filter
    pub async fn count(&self, params: &ListParams) -> AppResult<i64> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM users");
        Self::push_filter(&mut builder, params);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    /// Fetch one page of users
    pub async fn list(&self, params: &ListParams) -> AppResult<Vec<User>> {
        let mut builder = QueryBuilder::new("SELECT * FROM users");
        Self::push_filter(&mut builder, params);
        push_order_and_window(&mut builder, params);

        let users = builder.build_query_as::<User>().fetch_all(&self.pool).await?;
        Ok(users)
    }

    pub async fn list_all(&self) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at, id")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Create a user
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, email, full_name, phone, address)
            VALUES ($1, $2, LOWER($3), $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.full_name)
        .bind(&data.phone)
        .bind(&data.address)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::BadRequest("User could not be created, please try again later".to_string()))
    }

    /// Apply a partial update
    pub async fn update(&self, id: Uuid, data: &UpdateUser) -> AppResult<User> {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE users SET updated_at = NOW()");

        push_set!(builder, &data.username, "username");
        push_set!(builder, data.email.as_deref().map(str::to_lowercase), "email");
        push_set!(builder, &data.full_name, "full_name");
        push_set!(builder, &data.phone, "phone");
        push_set!(builder, &data.address, "address");

        builder.push(" WHERE id = ").push_bind(id).push(" RETURNING *");

        builder
            .build_query_as::<User>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Delete a user
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User with id {} not found", id)));
        }
        Ok(())
    }
}
