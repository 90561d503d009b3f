use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::ApiError;
use crate::models::todo::{parse_datetime, TodoPatch};

/// Raw `POST /todos` body, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTodoPayload {
    pub text: Option<String>,
}

/// Validated create command. Carries exactly the text, unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTodoDto {
    text: String,
}

impl CreateTodoDto {
    /// Absent, empty and whitespace-only text all fail with the same message.
    pub fn create(payload: CreateTodoPayload) -> Result<Self, ApiError> {
        match payload.text {
            Some(text) if !text.trim().is_empty() => Ok(CreateTodoDto { text }),
            _ => Err(ApiError::Validation(
                "Text property is required".to_string(),
            )),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Raw `PUT /todos/{id}` body, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoPayload {
    pub text: Option<String>,
    pub completed_at: Option<String>,
}

/// Validated partial-update command. Fields the caller did not supply stay
/// `None` and never reach the store.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTodoDto {
    id: i32,
    text: Option<String>,
    completed_at: Option<DateTime<Utc>>,
}

impl UpdateTodoDto {
    pub fn create(raw_id: &str, payload: UpdateTodoPayload) -> Result<Self, ApiError> {
        let id = raw_id
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| ApiError::Validation("Id must be a valid number".to_string()))?;

        // An explicit empty string is rejected rather than silently dropped;
        // text can never become empty through an update.
        let text = match payload.text {
            None => None,
            Some(text) if text.trim().is_empty() => {
                return Err(ApiError::Validation(
                    "Text property is required".to_string(),
                ))
            }
            Some(text) => Some(text),
        };

        let completed_at = match payload.completed_at {
            None => None,
            Some(raw) => Some(parse_datetime(&raw).ok_or_else(|| {
                ApiError::Validation("CompletedAt must be a valid date".to_string())
            })?),
        };

        Ok(UpdateTodoDto {
            id,
            text,
            completed_at,
        })
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    /// Patch view: only the fields actually supplied.
    pub fn values(&self) -> TodoPatch {
        TodoPatch {
            text: self.text.clone(),
            completed_at: self.completed_at,
        }
    }
}
