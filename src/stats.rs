//! Statistics Calculator: reduces annotated collections into the summary
//! structures behind dashboard cards. Every rate is a rounded percentage in
//! [0, 100] and degrades to 0 when its denominator is 0.

use serde::Serialize;

use crate::model::{AttendanceRecord, Member, Rating, TaskStatus};
use crate::status::{TaskRow, absent_by_omission};

#[derive(Debug, Default, Clone, Serialize)]
pub struct TaskStats {
    pub total: u64,
    pub completed: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub overdue: u64,
    pub cancelled: u64,
    /// round(completed / total * 100)
    pub completion_rate: u32,
    /// Over completed tasks that have both a deadline and a completion date.
    pub on_time_rate: u32,
    /// Mean score of completed tasks with a positive score. Unrounded; use
    /// `avg_score_display` for the 1-decimal presentation value.
    pub avg_score: f64,
}

impl TaskStats {
    pub fn avg_score_display(&self) -> f64 {
        (self.avg_score * 10.0).round() / 10.0
    }
}

fn percent(numerator: u64, denominator: u64) -> u32 {
    if denominator == 0 {
        return 0;
    }
    (numerator as f64 / denominator as f64 * 100.0).round() as u32
}

pub fn task_stats(rows: &[TaskRow]) -> TaskStats {
    let mut stats = TaskStats {
        total: rows.len() as u64,
        ..TaskStats::default()
    };

    let mut on_time = 0u64;
    let mut qualifying = 0u64;
    let mut score_sum = 0.0;
    let mut scored = 0u64;

    for row in rows {
        match row.derived_status {
            TaskStatus::Completed => stats.completed += 1,
            TaskStatus::Pending => stats.pending += 1,
            TaskStatus::InProgress => stats.in_progress += 1,
            TaskStatus::Overdue => stats.overdue += 1,
            TaskStatus::Cancelled => stats.cancelled += 1,
        }

        if row.derived_status == TaskStatus::Completed {
            if let (Some(deadline), Some(done)) = (row.task.deadline, row.task.completed_on) {
                qualifying += 1;
                if done <= deadline {
                    on_time += 1;
                }
            }
            if let Some(score) = row.task.score {
                if score > 0.0 {
                    score_sum += score;
                    scored += 1;
                }
            }
        }
    }

    stats.completion_rate = percent(stats.completed, stats.total);
    stats.on_time_rate = percent(on_time, qualifying);
    stats.avg_score = if scored == 0 { 0.0 } else { score_sum / scored as f64 };
    stats
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct AttendanceStats {
    pub present: u64,
    pub late: u64,
    pub absent: u64,
    pub on_leave: u64,
    pub half_day: u64,
    /// round((present + late) / active_members * 100)
    pub attendance_rate: u32,
}

/// Reduces one day's records against the active headcount. Absent combines
/// explicit Absent rows with the omission complement, so the bucket sum
/// still equals the headcount when upstream writes either form.
pub fn attendance_stats(records: &[AttendanceRecord], active_members: u64) -> AttendanceStats {
    let mut stats = AttendanceStats::default();

    for record in records {
        use crate::model::AttendanceStatus::*;
        match record.status {
            OnTime | Present => stats.present += 1,
            Late => stats.late += 1,
            Absent => stats.absent += 1,
            OnLeave => stats.on_leave += 1,
            HalfDay => stats.half_day += 1,
        }
    }

    stats.absent += absent_by_omission(active_members, records.len() as u64);
    stats.attendance_rate = percent(stats.present + stats.late, active_members);
    stats
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct RatingStats {
    /// Mean of every populated sub-score across all ratings, 0.0 when none.
    pub average: f64,
    pub samples: u64,
}

/// Flatten-then-average: all populated sub-scores of all ratings go into a
/// single pool. Deliberately not a mean of per-member means — the two
/// disagree whenever members have differing numbers of populated scores.
pub fn rating_stats(ratings: &[Rating]) -> RatingStats {
    let mut sum = 0.0;
    let mut samples = 0u64;
    for rating in ratings {
        for score in rating.present_scores() {
            sum += score;
            samples += 1;
        }
    }
    RatingStats {
        average: if samples == 0 { 0.0 } else { sum / samples as f64 },
        samples,
    }
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct MemberStats {
    pub total: u64,
    pub active: u64,
    pub inactive: u64,
}

pub fn member_stats(members: &[Member]) -> MemberStats {
    let active = members.iter().filter(|m| m.is_active()).count() as u64;
    MemberStats {
        total: members.len() as u64,
        active,
        inactive: members.len() as u64 - active,
    }
}
