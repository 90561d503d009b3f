use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, PooledConnection};

use dotenv::dotenv;

use super::{RepositoryError, TodoRepository};
use crate::models::todo::{NewTodo, Todo, TodoPatch};
use crate::repository::schema::todos::dsl::*;

type DBPool = r2d2::Pool<ConnectionManager<PgConnection>>;
type DBConnection = PooledConnection<ConnectionManager<PgConnection>>;

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        RepositoryError::Persistence(err.to_string())
    }
}

#[derive(Clone)]
pub struct Database {
    pool: DBPool,
}

impl Database {
    pub fn new() -> Result<Self, RepositoryError> {
        dotenv().ok();
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| RepositoryError::Persistence("DATABASE_URL must be set".to_string()))?;
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool: DBPool = r2d2::Pool::builder()
            .build(manager)
            .map_err(|err| RepositoryError::Persistence(err.to_string()))?;
        Ok(Database { pool })
    }

    fn conn(&self) -> Result<DBConnection, RepositoryError> {
        self.pool
            .get()
            .map_err(|err| RepositoryError::Persistence(err.to_string()))
    }
}

impl TodoRepository for Database {
    fn find_all(&self) -> Result<Vec<Todo>, RepositoryError> {
        let results = todos.order(id.asc()).load::<Todo>(&mut self.conn()?)?;
        Ok(results)
    }

    fn find_by_id(&self, todo_id: i32) -> Result<Todo, RepositoryError> {
        todos
            .find(todo_id)
            .first::<Todo>(&mut self.conn()?)
            .optional()?
            .ok_or(RepositoryError::NotFound { id: todo_id })
    }

    fn create(&self, todo_text: &str) -> Result<Todo, RepositoryError> {
        let created = diesel::insert_into(todos)
            .values(NewTodo { text: todo_text })
            .get_result::<Todo>(&mut self.conn()?)?;
        Ok(created)
    }

    fn update_by_id(&self, todo_id: i32, patch: TodoPatch) -> Result<Todo, RepositoryError> {
        // Diesel rejects an all-None changeset, and there is nothing to write.
        if patch.is_empty() {
            return self.find_by_id(todo_id);
        }
        diesel::update(todos.find(todo_id))
            .set(patch)
            .get_result::<Todo>(&mut self.conn()?)
            .optional()?
            .ok_or(RepositoryError::NotFound { id: todo_id })
    }

    fn delete_by_id(&self, todo_id: i32) -> Result<Todo, RepositoryError> {
        let existing = self.find_by_id(todo_id)?;
        diesel::delete(todos.find(todo_id)).execute(&mut self.conn()?)?;
        Ok(existing)
    }
}
