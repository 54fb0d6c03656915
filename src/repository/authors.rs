//! Authors repository for database operations

use sqlx::{Pool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::push_order_and_window;
use crate::{
    error::{AppError, AppResult},
    models::{
        author::{Author, CreateAuthor, UpdateAuthor},
        pagination::ListParams,
    },
};

/// Outcome of deleting an author
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorRemoval {
    pub placeholder_id: Uuid,
    pub placeholder_created: bool,
    pub reassigned_books: u64,
}

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, params: &ListParams) {
        if let Some(ref pattern) = params.pattern {
            builder.push(" WHERE name ILIKE ").push_bind(pattern.clone());
        }
    }

    /// Count authors matching the listing filter
    pub async fn count(&self, params: &ListParams) -> AppResult<i64> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM authors");
        Self::push_filter(&mut builder, params);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    /// Fetch one page of authors
    pub async fn list(&self, params: &ListParams) -> AppResult<Vec<Author>> {
        let mut builder = QueryBuilder::new("SELECT * FROM authors");
        Self::push_filter(&mut builder, params);
        push_order_and_window(&mut builder, params);

        let authors = builder
            .build_query_as::<Author>()
            .fetch_all(&self.pool)
            .await?;
        Ok(authors)
    }

    /// Every author, in insertion order
    pub async fn list_all(&self) -> AppResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>("SELECT * FROM authors ORDER BY created_at, id")
            .fetch_all(&self.pool)
            .await?;
        Ok(authors)
    }

    /// Get author by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Author> {
        sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }

    /// Create an author
    pub async fn create(&self, data: &CreateAuthor) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (id, name, bio, date_of_birth)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.bio)
        .bind(data.date_of_birth)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::BadRequest("Author could not be created, please try again later".to_string()))
    }

    /// Apply a partial update
    pub async fn update(&self, id: Uuid, data: &UpdateAuthor) -> AppResult<Author> {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE authors SET updated_at = NOW()");

        push_set!(builder, &data.name, "name");
        push_set!(builder, &data.bio, "bio");
        push_set!(builder, data.date_of_birth, "date_of_birth");

        builder.push(" WHERE id = ").push_bind(id).push(" RETURNING *");

        builder
            .build_query_as::<Author>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }

    /// Delete an author after moving its books to the placeholder author.
    ///
    /// The placeholder is looked up by name and created on first use. All
    /// statements run in one transaction.
    pub async fn delete_reassigning_books(
        &self,
        id: Uuid,
        placeholder_name: &str,
        placeholder_bio: &str,
    ) -> AppResult<AuthorRemoval> {
        let mut tx = self.pool.begin().await?;

        let name: String = sqlx::query_scalar("SELECT name FROM authors WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))?;

        if name == placeholder_name {
            return Err(AppError::BadRequest(
                "The placeholder author cannot be deleted".to_string(),
            ));
        }

        // Concurrent first deletions race on the unique name; the loser sees
        // the winner's row once it commits.
        let created: Option<Uuid> = sqlx::query_scalar(
            r#"
            INSERT INTO authors (id, name, bio)
            VALUES ($1, $2, $3)
            ON CONFLICT (name) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(placeholder_name)
        .bind(placeholder_bio)
        .fetch_optional(&mut *tx)
        .await?;

        let placeholder_id = match created {
            Some(id) => id,
            None => {
                sqlx::query_scalar("SELECT id FROM authors WHERE name = $1")
                    .bind(placeholder_name)
                    .fetch_one(&mut *tx)
                    .await?
            }
        };

        let reassigned = sqlx::query(
            "UPDATE books SET author_id = $1, updated_at = NOW() WHERE author_id = $2",
        )
        .bind(placeholder_id)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(AuthorRemoval {
            placeholder_id,
            placeholder_created: created.is_some(),
            reassigned_books: reassigned.rows_affected(),
        })
    }
}
