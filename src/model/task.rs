use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum TaskStatus {
    #[serde(rename = "Pending")]
    #[strum(serialize = "Pending")]
    Pending,
    #[serde(rename = "In Progress")]
    #[strum(serialize = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    #[strum(serialize = "Completed")]
    Completed,
    #[serde(rename = "Cancelled")]
    #[strum(serialize = "Cancelled")]
    Cancelled,
    /// Computed from the deadline at read time, never authoritative from
    /// storage. Stored tasks carrying it are re-derived anyway.
    #[serde(rename = "Overdue")]
    #[strum(serialize = "Overdue")]
    Overdue,
}

impl TaskStatus {
    /// Completed and Cancelled are terminal: derivation never overrides them.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Cancelled)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub assignee_id: u64,
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<NaiveDate>,
    /// Raw stored status. Display code must go through
    /// `status::derive_task_status`; this field is the source of truth for
    /// what was written, not for what the user sees.
    pub status: TaskStatus,
    /// Quality score on the canonical 0-100 scale. Inputs on a 0-5 scale
    /// are converted at the boundary with `normalize_score`.
    pub score: Option<f64>,
    pub completed_on: Option<NaiveDate>,
    pub created_at: NaiveDate,
    pub updated_at: Option<NaiveDate>,
}

/// Converts a 0-5 quality score to the canonical 0-100 scale. Values
/// already above 5 are assumed canonical and passed through.
pub fn normalize_score(raw: f64) -> f64 {
    if raw <= 5.0 { raw * 20.0 } else { raw }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_point_scores_scale_to_percent() {
        assert_eq!(normalize_score(4.5), 90.0);
        assert_eq!(normalize_score(0.0), 0.0);
    }

    #[test]
    fn percent_scores_pass_through() {
        assert_eq!(normalize_score(87.0), 87.0);
    }

    #[test]
    fn status_strings_round_trip() {
        use std::str::FromStr;
        assert_eq!(TaskStatus::InProgress.to_string(), "In Progress");
        assert_eq!(
            TaskStatus::from_str("In Progress").unwrap(),
            TaskStatus::InProgress
        );
    }
}
