//! User management service

use uuid::Uuid;
use validator::Validate;

use crate::{
    config::PaginationConfig,
    error::{AppError, AppResult},
    models::{
        pagination::{ListParams, ListQuery, PageRequest, Sort},
        user::{CreateUser, UpdateUser, User, UserPage, USER_SORT_FIELDS},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
    pagination: PaginationConfig,
}

impl UsersService {
    pub fn new(repository: Repository, pagination: PaginationConfig) -> Self {
        Self {
            repository,
            pagination,
        }
    }

    /// Search users by username, email or full name
    pub async fn search(&self, query: &ListQuery) -> AppResult<UserPage> {
        let page = PageRequest::new(query.page, query.limit, &self.pagination)?;
        let sort = Sort::resolve(
            query.sort_by.as_deref(),
            "username",
            query.order.as_deref(),
            USER_SORT_FIELDS,
        );
        let params = ListParams::new(query.search.as_deref(), sort, &page);

        let (total, users) = tokio::try_join!(
            self.repository.users.count(&params),
            self.repository.users.list(&params),
        )?;

        let meta = page.ensure_in_range(total)?;
        Ok(UserPage { users, meta })
    }

    pub async fn list_all(&self) -> AppResult<Vec<User>> {
        let users = self.repository.users.list_all().await?;
        if users.is_empty() {
            return Err(AppError::NotFound("No users found".to_string()));
        }
        Ok(users)
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }

    pub async fn create(&self, mut data: CreateUser) -> AppResult<User> {
        data.normalize();
        data.validate()?;
        let user = self.repository.users.create(&data).await?;
        tracing::info!(user_id = %user.id, "User {} created", user.username);
        Ok(user)
    }

    pub async fn update(&self, id: Uuid, mut data: UpdateUser) -> AppResult<User> {
        data.normalize();
        data.validate()?;
        self.repository.users.update(id, &data).await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.users.delete(id).await?;
        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }
}
