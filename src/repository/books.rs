//! Books repository for database operations

use sqlx::{Pool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::push_order_and_window;
use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, CreateBook, UpdateBook},
        pagination::ListParams,
    },
};

/// Listing filter specific to books
#[derive(Debug, Clone)]
pub struct BookFilter {
    pub list: ListParams,
    pub author: Option<Uuid>,
    pub category: Option<Uuid>,
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &BookFilter) {
        let mut keyword = " WHERE ";

        if let Some(ref pattern) = filter.list.pattern {
            builder.push(keyword).push("title ILIKE ").push_bind(pattern.clone());
            keyword = " AND ";
        }
        if let Some(author) = filter.author {
            builder.push(keyword).push("author_id = ").push_bind(author);
            keyword = " AND ";
        }
        if let Some(category) = filter.category {
            builder.push(keyword).push("category_id = ").push_bind(category);
        }
    }

    pub async fn count(&self, filter: &BookFilter) -> AppResult<i64> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM books");
        Self::push_filter(&mut builder, filter);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    pub async fn list(&self, filter: &BookFilter) -> AppResult<Vec<Book>> {
        let mut builder = QueryBuilder::new("SELECT * FROM books");
        Self::push_filter(&mut builder, filter);
        push_order_and_window(&mut builder, &filter.list);

        let books = builder.build_query_as::<Book>().fetch_all(&self.pool).await?;
        Ok(books)
    }

    pub async fn list_all(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY created_at, id")
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (id, title, author_id, category_id, description, isbn, published_year, price, quantity)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.title)
        .bind(data.author)
        .bind(data.category)
        .bind(&data.description)
        .bind(&data.isbn)
        .bind(data.published_year)
        .bind(data.price)
        .bind(data.quantity.unwrap_or(0))
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::BadRequest("Book could not be created, please try again later".to_string()))
    }

    pub async fn update(&self, id: Uuid, data: &UpdateBook) -> AppResult<Book> {
        let mut builder = QueryBuilder::<Postgres>::new("UPDATE books SET updated_at = NOW()");

        push_set!(builder, &data.title, "title");
        push_set!(builder, data.author, "author_id");
        push_set!(builder, data.category, "category_id");
        push_set!(builder, &data.description, "description");
        push_set!(builder, &data.isbn, "isbn");
        push_set!(builder, data.published_year, "published_year");
        push_set!(builder, data.price, "price");
        push_set!(builder, data.quantity, "quantity");

        builder.push(" WHERE id = ").push_bind(id).push(" RETURNING *");

        builder
            .build_query_as::<Book>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }
}
