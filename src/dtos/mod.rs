pub mod todo;

pub use todo::{CreateTodoDto, CreateTodoPayload, UpdateTodoDto, UpdateTodoPayload};
