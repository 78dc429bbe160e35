//! Sorter: type-aware, stable ordering of annotated task rows. Stability
//! is a correctness requirement — equal-ranked rows must not reshuffle
//! across repeated renders.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::status::TaskRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    #[strum(serialize = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    #[strum(serialize = "desc")]
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum TaskSortColumn {
    #[serde(rename = "title")]
    #[strum(serialize = "title")]
    Title,
    #[serde(rename = "assignee")]
    #[strum(serialize = "assignee")]
    Assignee,
    #[serde(rename = "status")]
    #[strum(serialize = "status")]
    Status,
    #[serde(rename = "deadline")]
    #[strum(serialize = "deadline")]
    Deadline,
    #[serde(rename = "completed_on")]
    #[strum(serialize = "completed_on")]
    CompletedOn,
    #[serde(rename = "score")]
    #[strum(serialize = "score")]
    Score,
    #[serde(rename = "created_at")]
    #[strum(serialize = "created_at")]
    CreatedAt,
}

/// Missing dates sort as far-future so undated rows land last in
/// ascending order.
fn date_key(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or(NaiveDate::MAX)
}

fn compare(a: &TaskRow, b: &TaskRow, column: TaskSortColumn) -> Ordering {
    match column {
        TaskSortColumn::Title => a.task.title.to_lowercase().cmp(&b.task.title.to_lowercase()),
        TaskSortColumn::Assignee => a
            .assignee_name
            .to_lowercase()
            .cmp(&b.assignee_name.to_lowercase()),
        TaskSortColumn::Status => a
            .derived_status
            .to_string()
            .to_lowercase()
            .cmp(&b.derived_status.to_string().to_lowercase()),
        TaskSortColumn::Deadline => date_key(a.task.deadline).cmp(&date_key(b.task.deadline)),
        TaskSortColumn::CompletedOn => {
            date_key(a.task.completed_on).cmp(&date_key(b.task.completed_on))
        }
        // Missing or non-positive scores coerce to 0.
        TaskSortColumn::Score => a
            .task
            .score
            .unwrap_or(0.0)
            .total_cmp(&b.task.score.unwrap_or(0.0)),
        TaskSortColumn::CreatedAt => a.task.created_at.cmp(&b.task.created_at),
    }
}

/// Returns a sorted copy; ties keep their pre-sort relative order.
pub fn sort_tasks(
    rows: &[TaskRow],
    column: TaskSortColumn,
    direction: SortDirection,
) -> Vec<TaskRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        let ord = compare(a, b, column);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    sorted
}
