//! Bookstore server
//!
//! A REST JSON API over a PostgreSQL store for authors, books, categories
//! and users.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers.
///
/// Services keep their own copy of the config sections they read.
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(config: AppConfig, repository: repository::Repository) -> Self {
        Self {
            services: Arc::new(services::Services::new(repository, &config)),
        }
    }
}
