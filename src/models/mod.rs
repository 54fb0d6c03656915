//! Data models for the bookstore

pub mod author;
pub mod book;
pub mod category;
pub mod pagination;
pub mod user;

/// Strip surrounding whitespace in place
pub(crate) fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

// Re-export commonly used types
pub use author::Author;
pub use book::Book;
pub use category::Category;
pub use pagination::{ListQuery, PageMeta};
pub use user::User;
