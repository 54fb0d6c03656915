//! Book catalog service

use uuid::Uuid;
use validator::Validate;

use crate::{
    config::PaginationConfig,
    error::{AppError, AppResult},
    models::{
        book::{Book, BookPage, BookQuery, CreateBook, UpdateBook, BOOK_SORT_FIELDS},
        pagination::{ListParams, PageRequest, Sort},
    },
    repository::{books::BookFilter, Repository},
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
    pagination: PaginationConfig,
}

impl BooksService {
    pub fn new(repository: Repository, pagination: PaginationConfig) -> Self {
        Self {
            repository,
            pagination,
        }
    }

    /// Search books by title, optionally restricted to an author or category
    pub async fn search(&self, query: &BookQuery) -> AppResult<BookPage> {
        let page = PageRequest::new(query.page, query.limit, &self.pagination)?;
        let sort = Sort::resolve(
            query.sort_by.as_deref(),
            "title",
            query.order.as_deref(),
            BOOK_SORT_FIELDS,
        );
        let filter = BookFilter {
            list: ListParams::new(query.search.as_deref(), sort, &page),
            author: query.author,
            category: query.category,
        };

        let (total, books) = tokio::try_join!(
            self.repository.books.count(&filter),
            self.repository.books.list(&filter),
        )?;

        let meta = page.ensure_in_range(total)?;
        Ok(BookPage { books, meta })
    }

    pub async fn list_all(&self) -> AppResult<Vec<Book>> {
        let books = self.repository.books.list_all().await?;
        if books.is_empty() {
            return Err(AppError::NotFound("No books found".to_string()));
        }
        Ok(books)
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    pub async fn create(&self, mut data: CreateBook) -> AppResult<Book> {
        data.normalize();
        data.validate()?;
        self.repository.books.create(&data).await
    }

    pub async fn update(&self, id: Uuid, mut data: UpdateBook) -> AppResult<Book> {
        data.normalize();
        data.validate()?;
        self.repository.books.update(id, &data).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!(book_id = %id, "Book deleted");
        Ok(())
    }
}
