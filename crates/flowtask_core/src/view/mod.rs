//! Derived task views used by the board screen.
//!
//! # Responsibility
//! - Filter task snapshots by list, archive state and search text.
//! - Compute completion statistics and sidebar counters.
//! - Resolve list labels for tasks, including dangling list references.
//!
//! # Invariants
//! - Functions here are pure over snapshots; they never call the services.
//! - Output order follows input order.

use crate::model::list::{List, ListId};
use crate::model::task::Task;

pub mod actions;
pub mod form;

/// Label shown for a task whose list no longer exists.
pub const UNKNOWN_LIST_NAME: &str = "Unknown List";
/// Color token shown for a task whose list no longer exists.
pub const FALLBACK_LIST_COLOR: &str = "gray";

/// Which list the board is scoped to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListSelection {
    #[default]
    All,
    One(ListId),
}

impl ListSelection {
    pub fn includes(&self, list_id: &str) -> bool {
        match self {
            Self::All => true,
            Self::One(selected) => selected == list_id,
        }
    }
}

/// Board filter state.
///
/// Archived tasks are an exclusive view: with `show_archived` only archived
/// tasks are listed, without it only non-archived ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub list: ListSelection,
    pub show_archived: bool,
    pub search: String,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        task.archived == self.show_archived
            && self.list.includes(&task.list_id)
            && task.matches_search(&self.search)
    }
}

pub fn filter_tasks(tasks: &[Task], filter: &TaskFilter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| filter.matches(task))
        .cloned()
        .collect()
}

/// Completion summary for a set of tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionStats {
    pub completed: usize,
    pub total: usize,
    /// Whole percent, rounded half up; 0 for an empty set.
    pub rate_percent: u32,
}

impl CompletionStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|task| task.completed).count();
        let rate_percent = if total == 0 {
            0
        } else {
            ((completed * 200 + total) / (total * 2)) as u32
        };
        Self {
            completed,
            total,
            rate_percent,
        }
    }
}

/// Counters displayed next to sidebar entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarCounts {
    /// Non-archived tasks across all lists.
    pub all_active: usize,
    /// Non-archived tasks per known list, in list order.
    pub per_list: Vec<(ListId, usize)>,
    pub archived: usize,
}

impl SidebarCounts {
    pub fn compute(tasks: &[Task], lists: &[List]) -> Self {
        let active = || tasks.iter().filter(|task| !task.archived);
        let per_list = lists
            .iter()
            .map(|list| {
                let count = active().filter(|task| task.list_id == list.id).count();
                (list.id.clone(), count)
            })
            .collect();

        Self {
            all_active: active().count(),
            per_list,
            archived: tasks.iter().filter(|task| task.archived).count(),
        }
    }

    pub fn for_list(&self, list_id: &str) -> usize {
        self.per_list
            .iter()
            .find(|(id, _)| id == list_id)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

pub fn list_name<'a>(lists: &'a [List], list_id: &str) -> &'a str {
    find_list(lists, list_id)
        .map(|list| list.name.as_str())
        .unwrap_or(UNKNOWN_LIST_NAME)
}

pub fn list_color<'a>(lists: &'a [List], list_id: &str) -> &'a str {
    find_list(lists, list_id)
        .map(|list| list.color.as_str())
        .unwrap_or(FALLBACK_LIST_COLOR)
}

fn find_list<'a>(lists: &'a [List], list_id: &str) -> Option<&'a List> {
    lists.iter().find(|list| list.id == list_id)
}

#[cfg(test)]
mod tests {
    use super::{
        filter_tasks, list_color, list_name, CompletionStats, ListSelection, SidebarCounts,
        TaskFilter,
    };
    use crate::model::list::{List, ListDraft};
    use crate::model::task::{Task, TaskDraft};
    use chrono::Utc;

    fn task(id: &str, title: &str, list_id: &str, completed: bool, archived: bool) -> Task {
        let mut draft = TaskDraft::new(title, list_id);
        draft.completed = completed;
        draft.archived = archived;
        Task::from_draft(id.to_string(), draft, Utc::now())
    }

    fn list(id: &str, name: &str, color: &str) -> List {
        List::from_draft(id.to_string(), ListDraft::new(name, color), Utc::now())
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|task| task.id.as_str()).collect()
    }

    fn board() -> Vec<Task> {
        let mut with_description = task("4", "Call", "home", false, false);
        with_description.description = Some("Ask about the Invoice".to_string());
        vec![
            task("1", "Write docs", "work", false, false),
            task("2", "Old ticket", "work", true, true),
            task("3", "Buy milk", "home", true, false),
            with_description,
        ]
    }

    #[test]
    fn default_filter_hides_archived() {
        let visible = filter_tasks(&board(), &TaskFilter::default());
        assert_eq!(ids(&visible), vec!["1", "3", "4"]);
    }

    #[test]
    fn archived_view_shows_only_archived() {
        let filter = TaskFilter {
            show_archived: true,
            ..TaskFilter::default()
        };
        assert_eq!(ids(&filter_tasks(&board(), &filter)), vec!["2"]);
    }

    #[test]
    fn list_selection_and_search_combine() {
        let filter = TaskFilter {
            list: ListSelection::One("home".to_string()),
            search: "INVOICE".to_string(),
            ..TaskFilter::default()
        };
        assert_eq!(ids(&filter_tasks(&board(), &filter)), vec!["4"]);
    }

    #[test]
    fn completion_rate_rounds_to_whole_percent() {
        let tasks = vec![
            task("1", "a", "l", true, false),
            task("2", "b", "l", false, false),
            task("3", "c", "l", false, false),
        ];
        let stats = CompletionStats::from_tasks(&tasks);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.rate_percent, 33);

        let stats = CompletionStats::from_tasks(&tasks[..2]);
        assert_eq!(stats.rate_percent, 50);

        let stats = CompletionStats::from_tasks(&[
            task("1", "a", "l", true, false),
            task("2", "b", "l", true, false),
            task("3", "c", "l", false, false),
        ]);
        assert_eq!(stats.rate_percent, 67);

        assert_eq!(CompletionStats::from_tasks(&[]), CompletionStats::default());
    }

    #[test]
    fn sidebar_counts_ignore_archived_and_cover_every_list() {
        let lists = vec![
            list("work", "Work", "green"),
            list("home", "Home", "blue"),
            list("empty", "Empty", "red"),
        ];
        let counts = SidebarCounts::compute(&board(), &lists);

        assert_eq!(counts.all_active, 3);
        assert_eq!(counts.archived, 1);
        assert_eq!(counts.for_list("work"), 1);
        assert_eq!(counts.for_list("home"), 2);
        assert_eq!(counts.for_list("empty"), 0);
        assert_eq!(counts.per_list.len(), 3);
    }

    #[test]
    fn labels_fall_back_for_dangling_list_ids() {
        let lists = vec![list("work", "Work", "green")];
        assert_eq!(list_name(&lists, "work"), "Work");
        assert_eq!(list_color(&lists, "work"), "green");
        assert_eq!(list_name(&lists, "deleted"), "Unknown List");
        assert_eq!(list_color(&lists, "deleted"), "gray");
    }
}
