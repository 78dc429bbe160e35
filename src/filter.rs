//! Filter Pipeline: AND-combined optional predicates over annotated rows.
//! An absent or empty filter value constrains nothing; inputs are never
//! mutated and match order is preserved.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{AttendanceRecord, AttendanceStatus, TaskStatus};
use crate::status::TaskRow;
use crate::utils::MemberIndex;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TaskFilters {
    pub department: Option<String>,
    pub assignee_id: Option<u64>,
    /// Matched against the derived status, not the stored one.
    pub status: Option<TaskStatus>,
    /// Inclusive deadline range.
    pub due_from: Option<NaiveDate>,
    pub due_to: Option<NaiveDate>,
    /// Case-insensitive substring over title, description, assignee name.
    pub search: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

pub fn filter_tasks(
    rows: &[TaskRow],
    filters: &TaskFilters,
    members: &MemberIndex<'_>,
) -> Vec<TaskRow> {
    let department_ids = non_empty(&filters.department).map(|d| members.department_members(d));
    let query = non_empty(&filters.search).map(str::to_lowercase);

    let out: Vec<TaskRow> = rows
        .iter()
        .filter(|row| {
            if let Some(ids) = &department_ids {
                if !ids.contains(&row.task.assignee_id) {
                    return false;
                }
            }
            if let Some(assignee) = filters.assignee_id {
                if row.task.assignee_id != assignee {
                    return false;
                }
            }
            if let Some(status) = filters.status {
                if row.derived_status != status {
                    return false;
                }
            }
            if let Some(from) = filters.due_from {
                match row.task.deadline {
                    Some(d) if d >= from => {}
                    _ => return false,
                }
            }
            if let Some(to) = filters.due_to {
                match row.task.deadline {
                    Some(d) if d <= to => {}
                    _ => return false,
                }
            }
            if let Some(query) = &query {
                let in_title = row.task.title.to_lowercase().contains(query);
                let in_description = row
                    .task
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(query));
                let in_assignee = row.assignee_name.to_lowercase().contains(query);
                if !(in_title || in_description || in_assignee) {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect();

    tracing::debug!(input = rows.len(), output = out.len(), "Task filter applied");
    out
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AttendanceFilters {
    pub department: Option<String>,
    pub member_id: Option<u64>,
    pub status: Option<AttendanceStatus>,
    /// Inclusive record-date range.
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

pub fn filter_attendance(
    records: &[AttendanceRecord],
    filters: &AttendanceFilters,
    members: &MemberIndex<'_>,
) -> Vec<AttendanceRecord> {
    let department_ids = non_empty(&filters.department).map(|d| members.department_members(d));

    records
        .iter()
        .filter(|record| {
            if let Some(ids) = &department_ids {
                if !ids.contains(&record.member_id) {
                    return false;
                }
            }
            if let Some(member) = filters.member_id {
                if record.member_id != member {
                    return false;
                }
            }
            if let Some(status) = filters.status {
                if record.status != status {
                    return false;
                }
            }
            if let Some(from) = filters.from {
                if record.date < from {
                    return false;
                }
            }
            if let Some(to) = filters.to {
                if record.date > to {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}
