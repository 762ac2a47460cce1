//! Task domain entity and its label association.

use serde::{Deserialize, Serialize};

use crate::constants::{TASK_OPEN, UNCONSTRAINED};

/// A work item with open/close timestamps, an author and an assignee.
///
/// Timestamps are epoch seconds. `closed == 0` means the task is open.
/// Zero ids for `author_id`/`assigned_id` on input mean "use the default user".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct Task {
    /// Database-assigned identifier
    #[serde(rename = "ID", alias = "id")]
    pub id: i32,
    /// Creation time, set by the database
    #[serde(rename = "Opened", alias = "opened")]
    pub opened: i64,
    /// Close time, 0 while open
    #[serde(rename = "Closed", alias = "closed")]
    pub closed: i64,
    #[serde(rename = "AuthorID", alias = "author_id")]
    pub author_id: i32,
    #[serde(rename = "AssignedID", alias = "assigned_id")]
    pub assigned_id: i32,
    #[serde(rename = "Title", alias = "title")]
    #[cfg_attr(feature = "openapi", schema(example = "Fix login page"))]
    pub title: String,
    #[serde(rename = "Content", alias = "content")]
    pub content: String,
}

impl Task {
    /// Create an unsaved task carrying only the user-supplied text
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    /// Set an explicit author (builder style)
    pub fn authored_by(mut self, author_id: i32) -> Self {
        self.author_id = author_id;
        self
    }

    /// Set an explicit assignee (builder style)
    pub fn assigned_to(mut self, assigned_id: i32) -> Self {
        self.assigned_id = assigned_id;
        self
    }

    /// Check if the task is still open
    pub fn is_open(&self) -> bool {
        self.closed == TASK_OPEN
    }

    /// Author to store on insert, `None` lets the database default apply
    pub fn explicit_author(&self) -> Option<i32> {
        (self.author_id != UNCONSTRAINED).then_some(self.author_id)
    }

    /// Assignee to store on insert, `None` lets the database default apply
    pub fn explicit_assignee(&self) -> Option<i32> {
        (self.assigned_id != UNCONSTRAINED).then_some(self.assigned_id)
    }
}

/// Association between a task and a label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct TaskLabel {
    #[serde(rename = "TaskID", alias = "task_id")]
    pub task_id: i32,
    #[serde(rename = "LabelID", alias = "label_id")]
    pub label_id: i32,
}

impl TaskLabel {
    pub fn new(task_id: i32, label_id: i32) -> Self {
        Self { task_id, label_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_open_with_default_people() {
        let task = Task::new("title", "content");
        assert!(task.is_open());
        assert_eq!(task.explicit_author(), None);
        assert_eq!(task.explicit_assignee(), None);
    }

    #[test]
    fn explicit_people_are_kept() {
        let task = Task::new("t", "c").authored_by(3).assigned_to(4);
        assert_eq!(task.explicit_author(), Some(3));
        assert_eq!(task.explicit_assignee(), Some(4));
    }

    #[test]
    fn accepts_legacy_field_names() {
        let task: Task = serde_json::from_str(
            r#"{"ID": 7, "Closed": 1700000000, "Title": "legacy", "Content": "body"}"#,
        )
        .unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.title, "legacy");
        assert!(!task.is_open());
        assert_eq!(task.author_id, 0);
    }

    #[test]
    fn serializes_legacy_field_names() {
        let json = serde_json::to_value(Task::new("a", "b").authored_by(2)).unwrap();
        assert_eq!(json["AuthorID"], 2);
        assert_eq!(json["Title"], "a");
        assert!(json.get("title").is_none());
        assert!(json.get("author_id").is_none());
    }

    #[test]
    fn accepts_snake_case_field_names() {
        let link: TaskLabel = serde_json::from_str(r#"{"task_id": 4, "label_id": 9}"#).unwrap();
        assert_eq!(link, TaskLabel::new(4, 9));
        assert_eq!(
            serde_json::to_string(&link).unwrap(),
            r#"{"TaskID":4,"LabelID":9}"#
        );
    }
}
