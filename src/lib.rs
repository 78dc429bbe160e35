//! Workforce analytics aggregation engine.
//!
//! Given in-memory snapshots of members, attendance punches, tasks, and
//! ratings plus a reference "today", this crate derives effective statuses,
//! filters/sorts/paginates tabular views, and produces summary statistics
//! and chart-ready series. Everything is a pure function over its inputs;
//! persistence, transport, and rendering are the caller's problem.

pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod paginate;
pub mod series;
pub mod sort;
pub mod stats;
pub mod status;
pub mod utils;
pub mod view;

pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use filter::{AttendanceFilters, TaskFilters, filter_attendance, filter_tasks};
pub use model::{
    AttendanceRecord, AttendanceStatus, Member, MemberStatus, Rating, Settings, Task, TaskStatus,
    normalize_score,
};
pub use paginate::{Page, paginate};
pub use series::{
    ChartData, Series, attendance_daily_series, attendance_monthly_series, task_daily_series,
    task_monthly_series,
};
pub use sort::{SortDirection, TaskSortColumn, sort_tasks};
pub use stats::{
    AttendanceStats, MemberStats, RatingStats, TaskStats, attendance_stats, member_stats,
    rating_stats, task_stats,
};
pub use status::{TaskRow, absent_by_omission, annotate_tasks, derive_punch_status, derive_task_status};
pub use utils::{MemberIndex, UNKNOWN_MEMBER};
pub use view::{ViewState, task_view};
