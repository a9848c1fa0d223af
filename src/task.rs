//! Task records as handled by the task forms.

use crate::constants::DEFAULT_REPEAT_INTERVAL_NUMBER;
use crate::format::DateSpan;
use crate::sort::{FieldValue, SortRecord};
use crate::utils::datetime::DateLike;
use serde::{Deserialize, Serialize};

/// A task that has not been stored yet, so it carries no id or creation time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub name: String,
    pub description: String,
    pub due_date: Option<String>,
    pub start_date: Option<String>,
    pub completed: i64,
    pub repeat_specific_days: Vec<u8>,
    pub completed_at: Option<String>,
    pub important: bool,
    pub urgent: bool,
    pub repeat_interval: String,
    pub repeat_interval_number: u32,
    pub archived: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

impl Default for NewTask {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            due_date: None,
            start_date: None,
            completed: 0,
            repeat_specific_days: Vec::new(),
            completed_at: None,
            important: false,
            urgent: false,
            repeat_interval: String::new(),
            repeat_interval_number: DEFAULT_REPEAT_INTERVAL_NUMBER,
            archived: false,
            category_id: None,
        }
    }
}

impl NewTask {
    /// The task's start/due dates, ready for [`crate::format::display_date`]
    pub fn date_span(&self) -> DateSpan {
        DateSpan::new(
            self.due_date.clone().map(DateLike::from),
            self.start_date.clone().map(DateLike::from),
        )
    }
}

fn optional_text(value: &Option<String>) -> FieldValue {
    value.clone().map(FieldValue::Text).unwrap_or(FieldValue::Null)
}

impl SortRecord for NewTask {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "name" => FieldValue::Text(self.name.clone()),
            "description" => FieldValue::Text(self.description.clone()),
            "due_date" => optional_text(&self.due_date),
            "start_date" => optional_text(&self.start_date),
            "completed" => FieldValue::Number(self.completed as f64),
            "repeat_specific_days" => FieldValue::List(
                self.repeat_specific_days
                    .iter()
                    .map(|day| FieldValue::Number(f64::from(*day)))
                    .collect(),
            ),
            "completed_at" => optional_text(&self.completed_at),
            "important" => FieldValue::Bool(self.important),
            "urgent" => FieldValue::Bool(self.urgent),
            "repeat_interval" => FieldValue::Text(self.repeat_interval.clone()),
            "repeat_interval_number" => FieldValue::Number(f64::from(self.repeat_interval_number)),
            "archived" => FieldValue::Bool(self.archived),
            "category_id" => self
                .category_id
                .map(|id| FieldValue::Number(id as f64))
                .unwrap_or(FieldValue::Missing),
            _ => FieldValue::Missing,
        }
    }
}
