//! Repository layer for database operations

use sqlx::{Pool, Postgres, QueryBuilder};

use crate::{error::AppResult, models::pagination::ListParams};

/// Append `, <column> = $n` to an UPDATE when the patch carries the field
macro_rules! push_set {
    ($builder:ident, $field:expr, $column:literal) => {
        if let Some(value) = $field {
            $builder.push(concat!(", ", $column, " = ")).push_bind(value);
        }
    };
}

pub mod authors;
pub mod books;
pub mod categories;
pub mod users;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub authors: authors::AuthorsRepository,
    pub books: books::BooksRepository,
    pub categories: categories::CategoriesRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            authors: authors::AuthorsRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            categories: categories::CategoriesRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            pool,
        }
    }

    /// Round-trip to the database (readiness probe)
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Append ORDER BY, LIMIT and OFFSET for a listing.
///
/// Unsorted listings fall back to insertion order so pages stay stable.
pub(crate) fn push_order_and_window(builder: &mut QueryBuilder<'_, Postgres>, params: &ListParams) {
    match params.sort {
        Some(sort) => {
            builder.push(format!(" ORDER BY {} {}, id", sort.column, sort.order.as_sql()));
        }
        None => {
            builder.push(" ORDER BY created_at, id");
        }
    }
    builder
        .push(" LIMIT ")
        .push_bind(params.limit)
        .push(" OFFSET ")
        .push_bind(params.offset);
}
