pub mod database;
pub mod schema;

use thiserror::Error;

use crate::models::todo::{Todo, TodoPatch};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Todo with id {id} not found")]
    NotFound { id: i32 },
    #[error("{0}")]
    Persistence(String),
}

/// Persistence boundary for todos. The service owns no copies across
/// requests; the store behind this trait holds the authoritative state.
pub trait TodoRepository: Send + Sync {
    fn find_all(&self) -> Result<Vec<Todo>, RepositoryError>;
    fn find_by_id(&self, id: i32) -> Result<Todo, RepositoryError>;
    fn create(&self, text: &str) -> Result<Todo, RepositoryError>;
    fn update_by_id(&self, id: i32, patch: TodoPatch) -> Result<Todo, RepositoryError>;
    /// Returns the record's state prior to deletion.
    fn delete_by_id(&self, id: i32) -> Result<Todo, RepositoryError>;
}
