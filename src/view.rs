//! Caller-owned view state and the composed tabular pipeline. The engine
//! holds no state between calls; filters, sort, and page live in this
//! value object, threaded through by the UI layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::filter::{TaskFilters, filter_tasks};
use crate::model::{Member, Task};
use crate::paginate::{Page, paginate};
use crate::sort::{SortDirection, TaskSortColumn, sort_tasks};
use crate::status::{TaskRow, annotate_tasks};
use crate::utils::MemberIndex;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewState {
    pub filters: TaskFilters,
    pub sort: Option<(TaskSortColumn, SortDirection)>,
    pub page: u32,
    pub per_page: u32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filters: TaskFilters::default(),
            sort: None,
            page: 1,
            per_page: EngineConfig::global().default_per_page,
        }
    }
}

impl ViewState {
    /// Re-selecting the current sort column flips direction; a new column
    /// resets to ascending.
    pub fn toggle_sort(&mut self, column: TaskSortColumn) {
        self.sort = match self.sort {
            Some((current, direction)) if current == column => {
                Some((column, direction.flipped()))
            }
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    /// Pages are not stable across filter changes; callers reset whenever
    /// the filtered set changes size.
    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    pub fn set_filters(&mut self, filters: TaskFilters) {
        self.filters = filters;
        self.reset_page();
    }
}

/// The shared tabular pipeline: annotate with derived status and assignee
/// names, filter, sort, paginate. Both the dashboard and the performance
/// views are calls to this with different view state.
pub fn task_view(
    tasks: &[Task],
    members: &[Member],
    state: &ViewState,
    today: NaiveDate,
) -> Result<Page<TaskRow>> {
    let index = MemberIndex::new(members);
    let rows = annotate_tasks(tasks, &index, today);
    let filtered = filter_tasks(&rows, &state.filters, &index);
    let ordered = match state.sort {
        Some((column, direction)) => sort_tasks(&filtered, column, direction),
        None => filtered,
    };
    paginate(&ordered, state.page, state.per_page)
}
