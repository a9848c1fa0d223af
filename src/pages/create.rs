//! Task creation page

use crate::task::NewTask;
use serde::Serialize;

/// Data handed to the task creation form.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreatePage {
    pub task: NewTask,
}

/// Load the creation page with a blank task
pub fn load() -> CreatePage {
    CreatePage { task: NewTask::default() }
}
