use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::dtos::todo::{CreateTodoDto, CreateTodoPayload, UpdateTodoDto, UpdateTodoPayload};
use crate::error::ApiError;
use crate::repository::TodoRepository;

// Ids arrive as raw path segments so a bad id yields the API's own 400 body
// instead of a framework-shaped error.
fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::Validation("Invalid id".to_string()))
}

#[get("/todos")]
pub async fn get_todos(db: web::Data<dyn TodoRepository>) -> Result<HttpResponse, ApiError> {
    let todos = db.find_all()?;
    Ok(HttpResponse::Ok().json(todos))
}

#[get("/todos/{id}")]
pub async fn get_todo_by_id(
    db: web::Data<dyn TodoRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path)?;
    let todo = db.find_by_id(id)?;
    Ok(HttpResponse::Ok().json(todo))
}

#[post("/todos")]
pub async fn create_todo(
    db: web::Data<dyn TodoRepository>,
    payload: web::Json<CreateTodoPayload>,
) -> Result<HttpResponse, ApiError> {
    let dto = CreateTodoDto::create(payload.into_inner())?;
    let todo = db.create(dto.text())?;
    Ok(HttpResponse::Created().json(todo))
}

#[put("/todos/{id}")]
pub async fn update_todo_by_id(
    db: web::Data<dyn TodoRepository>,
    path: web::Path<String>,
    payload: web::Json<UpdateTodoPayload>,
) -> Result<HttpResponse, ApiError> {
    let dto = UpdateTodoDto::create(&path, payload.into_inner())?;
    let todo = db.update_by_id(dto.id(), dto.values())?;
    Ok(HttpResponse::Ok().json(todo))
}

#[delete("/todos/{id}")]
pub async fn delete_todo_by_id(
    db: web::Data<dyn TodoRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path)?;
    let todo = db.delete_by_id(id)?;
    Ok(HttpResponse::Ok().json(todo))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(create_todo)
        .service(get_todo_by_id)
        .service(get_todos)
        .service(delete_todo_by_id)
        .service(update_todo_by_id);
}
