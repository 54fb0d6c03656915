//! Author catalog service

use uuid::Uuid;
use validator::Validate;

use crate::{
    config::{CatalogConfig, PaginationConfig},
    error::{AppError, AppResult},
    models::{
        author::{Author, AuthorPage, CreateAuthor, UpdateAuthor, AUTHOR_SORT_FIELDS},
        pagination::{ListParams, ListQuery, PageRequest, Sort},
    },
    repository::{authors::AuthorRemoval, Repository},
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
    pagination: PaginationConfig,
    catalog: CatalogConfig,
}

impl AuthorsService {
    pub fn new(repository: Repository, pagination: PaginationConfig, catalog: CatalogConfig) -> Self {
        Self {
            repository,
            pagination,
            catalog,
        }
    }

    /// Search authors by name with sorting and pagination.
    ///
    /// Count and page are fetched together; a page outside `1..=totalPages`
    /// is a bad request, even when the collection is empty.
    pub async fn search(&self, query: &ListQuery) -> AppResult<AuthorPage> {
        let page = PageRequest::new(query.page, query.limit, &self.pagination)?;
        let sort = Sort::resolve(
            query.sort_by.as_deref(),
            "name",
            query.order.as_deref(),
            AUTHOR_SORT_FIELDS,
        );
        let params = ListParams::new(query.search.as_deref(), sort, &page);

        let (total, authors) = tokio::try_join!(
            self.repository.authors.count(&params),
            self.repository.authors.list(&params),
        )?;

        let meta = page.ensure_in_range(total)?;
        Ok(AuthorPage { authors, meta })
    }

    /// Every author; an empty collection is reported as not found
    pub async fn list_all(&self) -> AppResult<Vec<Author>> {
        let authors = self.repository.authors.list_all().await?;
        if authors.is_empty() {
            return Err(AppError::NotFound("No authors found".to_string()));
        }
        Ok(authors)
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Author> {
        self.repository.authors.get_by_id(id).await
    }

    pub async fn create(&self, mut data: CreateAuthor) -> AppResult<Author> {
        data.normalize();
        data.validate()?;
        let author = self.repository.authors.create(&data).await?;
        tracing::debug!(author_id = %author.id, "Author created");
        Ok(author)
    }

    pub async fn update(&self, id: Uuid, mut data: UpdateAuthor) -> AppResult<Author> {
        data.normalize();
        data.validate()?;
        self.repository.authors.update(id, &data).await
    }

    /// Delete an author, handing its books over to the placeholder author
    pub async fn delete(&self, id: Uuid) -> AppResult<AuthorRemoval> {
        let removal = self
            .repository
            .authors
            .delete_reassigning_books(
                id,
                &self.catalog.unknown_author_name,
                &self.catalog.unknown_author_bio,
            )
            .await?;

        if removal.placeholder_created {
            tracing::info!(
                placeholder_id = %removal.placeholder_id,
                "Created placeholder author \"{}\"",
                self.catalog.unknown_author_name
            );
        }
        tracing::info!(
            author_id = %id,
            reassigned_books = removal.reassigned_books,
            "Author deleted"
        );

        Ok(removal)
    }
}
