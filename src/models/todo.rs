use chrono::prelude::*;
use diesel::{AsChangeset, Identifiable, Insertable, Queryable};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable, Identifiable)]
#[diesel(table_name = crate::repository::schema::todos)]
pub struct Todo {
    pub id: i32,
    pub text: String,
    #[serde(rename = "completedAt")]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::repository::schema::todos)]
pub struct NewTodo<'a> {
    pub text: &'a str,
}

/// Partial update: `None` fields are left untouched by the store.
#[derive(Debug, Clone, Default, PartialEq, AsChangeset)]
#[diesel(table_name = crate::repository::schema::todos)]
pub struct TodoPatch {
    pub text: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.completed_at.is_none()
    }
}

impl Todo {
    /// Trusted construction from already-valid fields.
    pub fn new(id: i32, text: impl Into<String>, completed_at: Option<DateTime<Utc>>) -> Self {
        Todo {
            id,
            text: text.into(),
            completed_at,
        }
    }

    /// Validating factory for untrusted input, e.g. a record read back from
    /// an external source. `completed_at` ends up parsed or `None`, never the
    /// raw string.
    pub fn from_object(object: &Value) -> Result<Self, ApiError> {
        let id = object
            .get("id")
            .and_then(Value::as_i64)
            .and_then(|id| i32::try_from(id).ok())
            .filter(|id| *id > 0)
            .ok_or_else(|| ApiError::Validation("Id is required".to_string()))?;
        let text = object
            .get("text")
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| ApiError::Validation("Text is required".to_string()))?;

        let completed_at = match object.get("completedAt") {
            None | Some(Value::Null) => None,
            Some(value) => {
                let raw = value.as_str().unwrap_or_default();
                let parsed = parse_datetime(raw).ok_or_else(|| {
                    ApiError::Validation("CompletedAt is not a valid date".to_string())
                })?;
                Some(parsed)
            }
        };

        Ok(Todo::new(id, text, completed_at))
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

/// Accepts RFC 3339, an ISO datetime without offset (taken as UTC), or a bare
/// `YYYY-MM-DD` (taken as UTC midnight).
pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&parsed));
        }
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&parsed.and_hms_opt(0, 0, 0)?));
    }
    None
}
