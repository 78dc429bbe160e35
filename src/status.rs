//! Status derivation: computed views over stored fields and the reference
//! "today". Nothing here is ever written back to storage.

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::Serialize;

use crate::model::{AttendanceStatus, Settings, Task, TaskStatus};
use crate::utils::MemberIndex;

/// Effective status of a task as of `today`.
///
/// Completed and Cancelled are terminal and returned unchanged. Otherwise a
/// task whose deadline has passed (calendar-day comparison, time-of-day
/// ignored) is Overdue, and anything else keeps its stored status. The
/// function is idempotent and must be re-applied on every read, since
/// "today" advances independently of data writes.
pub fn derive_task_status(task: &Task, today: NaiveDate) -> TaskStatus {
    if task.status.is_terminal() {
        return task.status;
    }
    match task.deadline {
        Some(deadline) if deadline < today => TaskStatus::Overdue,
        _ => task.status,
    }
}

/// Absent count under the closed-world rule: every active member without a
/// record on the date is absent. This silently misclassifies members that
/// no attendance policy applies to yet (new hires, exempt roles); keeping
/// it a named function is what lets that policy be swapped later.
pub fn absent_by_omission(active_members: u64, records_present: u64) -> u64 {
    active_members.saturating_sub(records_present)
}

/// Punch classification against org settings: on time up to the work start,
/// Present inside the grace window, Late after it. No punch is Absent.
pub fn derive_punch_status(check_in: Option<NaiveTime>, settings: &Settings) -> AttendanceStatus {
    let Some(check_in) = check_in else {
        return AttendanceStatus::Absent;
    };
    let grace_end = settings.work_start + Duration::minutes(settings.grace_minutes as i64);
    if check_in <= settings.work_start {
        AttendanceStatus::OnTime
    } else if check_in <= grace_end {
        AttendanceStatus::Present
    } else {
        AttendanceStatus::Late
    }
}

/// A task annotated for display: the raw stored status stays inside
/// `task`, the derived status lives alongside it so the source of truth
/// can never be overwritten by a render pass.
#[derive(Debug, Clone, Serialize)]
pub struct TaskRow {
    #[serde(flatten)]
    pub task: Task,
    pub derived_status: TaskStatus,
    pub assignee_name: String,
}

/// Annotates a task snapshot with derived status and resolved assignee
/// names. The input is not mutated; relative order is preserved.
pub fn annotate_tasks(tasks: &[Task], members: &MemberIndex<'_>, today: NaiveDate) -> Vec<TaskRow> {
    tasks
        .iter()
        .map(|task| TaskRow {
            derived_status: derive_task_status(task, today),
            assignee_name: members.resolve_name(task.assignee_id).to_string(),
            task: task.clone(),
        })
        .collect()
}
