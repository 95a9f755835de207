//! Task form state and caller-side validation.
//!
//! The services accept any title; a blank title is rejected here, before a
//! draft or patch is produced.

use crate::model::list::{List, ListId};
use crate::model::task::{Priority, Task, TaskDraft, TaskPatch};
use crate::view::ListSelection;
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    TitleRequired,
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleRequired => f.write_str("task title is required"),
        }
    }
}

impl Error for FormError {}

/// Editable task fields backing the create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub list_id: ListId,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

impl TaskForm {
    /// Blank form targeting the selected list, or the first list when the
    /// board shows all lists.
    pub fn new(selection: &ListSelection, lists: &[List]) -> Self {
        let list_id = match selection {
            ListSelection::One(id) => id.clone(),
            ListSelection::All => lists.first().map(|list| list.id.clone()).unwrap_or_default(),
        };
        Self {
            list_id,
            ..Self::default()
        }
    }

    /// Form prefilled from an existing task for editing.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            list_id: task.list_id.clone(),
            priority: task.priority,
            due_date: task.due_date,
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::TitleRequired);
        }
        Ok(())
    }

    /// Validated draft for a new, open, unarchived task.
    pub fn into_draft(self) -> Result<TaskDraft, FormError> {
        self.validate()?;
        let description = self.description_value();
        Ok(TaskDraft {
            title: self.title,
            description,
            list_id: self.list_id,
            priority: self.priority,
            due_date: self.due_date,
            completed: false,
            archived: false,
        })
    }

    /// Validated patch replacing every form-editable field.
    pub fn into_patch(self) -> Result<TaskPatch, FormError> {
        self.validate()?;
        let description = self.description_value();
        Ok(TaskPatch {
            title: Some(self.title),
            description: Some(description),
            list_id: Some(self.list_id),
            priority: Some(self.priority),
            due_date: Some(self.due_date),
            ..TaskPatch::default()
        })
    }

    fn description_value(&self) -> Option<String> {
        if self.description.trim().is_empty() {
            None
        } else {
            Some(self.description.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FormError, TaskForm};
    use crate::model::list::{List, ListDraft};
    use crate::model::task::{Priority, Task, TaskDraft};
    use crate::view::ListSelection;
    use chrono::Utc;

    fn lists() -> Vec<List> {
        vec![
            List::from_draft("l1".to_string(), ListDraft::new("Home", "blue"), Utc::now()),
            List::from_draft("l2".to_string(), ListDraft::new("Work", "green"), Utc::now()),
        ]
    }

    #[test]
    fn new_form_defaults_to_first_list_when_showing_all() {
        let form = TaskForm::new(&ListSelection::All, &lists());
        assert_eq!(form.list_id, "l1");
        assert_eq!(form.priority, Priority::Medium);

        let form = TaskForm::new(&ListSelection::One("l2".to_string()), &lists());
        assert_eq!(form.list_id, "l2");

        let form = TaskForm::new(&ListSelection::All, &[]);
        assert_eq!(form.list_id, "");
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut form = TaskForm::new(&ListSelection::All, &lists());
        form.title = "   ".to_string();

        assert_eq!(form.validate(), Err(FormError::TitleRequired));
        assert_eq!(form.into_draft(), Err(FormError::TitleRequired));
    }

    #[test]
    fn draft_starts_open_and_drops_blank_description() {
        let mut form = TaskForm::new(&ListSelection::All, &lists());
        form.title = "Pay rent".to_string();
        form.priority = Priority::High;

        let draft = form.into_draft().unwrap();
        assert_eq!(draft.title, "Pay rent");
        assert_eq!(draft.description, None);
        assert_eq!(draft.priority, Priority::High);
        assert!(!draft.completed);
        assert!(!draft.archived);
    }

    #[test]
    fn edit_form_round_trips_into_patch_without_touching_flags() {
        let mut draft = TaskDraft::new("Read book", "l2");
        draft.description = Some("chapter 3".to_string());
        draft.completed = true;
        let task = Task::from_draft("t1".to_string(), draft, Utc::now());

        let mut form = TaskForm::from_task(&task);
        assert_eq!(form.description, "chapter 3");
        form.description.clear();

        let patch = form.into_patch().unwrap();
        assert_eq!(patch.title.as_deref(), Some("Read book"));
        assert_eq!(patch.description, Some(None));
        assert_eq!(patch.completed, None);
        assert_eq!(patch.archived, None);
    }
}
