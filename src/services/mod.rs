//! Business logic services

pub mod authors;
pub mod books;
pub mod categories;
pub mod users;

use crate::{config::AppConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub repository: Repository,
    pub authors: authors::AuthorsService,
    pub books: books::BooksService,
    pub categories: categories::CategoriesService,
    pub users: users::UsersService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, config: &AppConfig) -> Self {
        Self {
            authors: authors::AuthorsService::new(
                repository.clone(),
                config.pagination.clone(),
                config.catalog.clone(),
            ),
            books: books::BooksService::new(repository.clone(), config.pagination.clone()),
            categories: categories::CategoriesService::new(repository.clone(), config.pagination.clone()),
            users: users::UsersService::new(repository.clone(), config.pagination.clone()),
            repository,
        }
    }

    /// Check the database is reachable
    pub async fn ready(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
