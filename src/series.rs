//! Series Builder: buckets collections into trailing calendar windows and
//! emits aligned numeric series for chart consumption. Every series always
//! carries exactly one point per label, zero-filled, so chart axes stay
//! stable regardless of how sparse the underlying data is.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::error::{EngineError, Result};
use crate::model::{AttendanceRecord, Task};
use crate::status::absent_by_omission;

#[derive(Debug, Clone, Serialize)]
pub struct Series {
    pub name: String,
    pub data: Vec<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

/// The `days` calendar days ending at `today` inclusive, oldest first.
fn daily_window(today: NaiveDate, days: u32) -> Result<Vec<NaiveDate>> {
    if days == 0 {
        return Err(EngineError::EmptyWindow);
    }
    Ok((0..days)
        .rev()
        .map(|back| today - Duration::days(back as i64))
        .collect())
}

/// The `months` calendar months ending at today's month inclusive, oldest
/// first, as (year, month) keys.
fn monthly_window(today: NaiveDate, months: u32) -> Result<Vec<(i32, u32)>> {
    if months == 0 {
        return Err(EngineError::EmptyWindow);
    }
    let current = today.year() * 12 + today.month0() as i32;
    Ok((0..months as i32)
        .rev()
        .map(|back| {
            let index = current - back;
            (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
        })
        .collect())
}

fn day_label(date: NaiveDate) -> String {
    date.format("%b %d").to_string()
}

fn month_label(year: i32, month: u32) -> String {
    // Any day of the month works for formatting.
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_default()
}

fn month_key(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

/// Present/Late/Absent per day over the trailing window. Absence uses the
/// omission rule against the active headcount *at call time*; headcount
/// changes are not back-applied to past days.
pub fn attendance_daily_series(
    records: &[AttendanceRecord],
    days: u32,
    today: NaiveDate,
    active_members: u64,
) -> Result<ChartData> {
    let window = daily_window(today, days)?;
    let mut present = Vec::with_capacity(window.len());
    let mut late = Vec::with_capacity(window.len());
    let mut absent = Vec::with_capacity(window.len());

    for day in &window {
        let mut day_present = 0u64;
        let mut day_late = 0u64;
        let mut day_absent = 0u64;
        let mut day_records = 0u64;
        for record in records.iter().filter(|r| r.date == *day) {
            day_records += 1;
            use crate::model::AttendanceStatus::*;
            match record.status {
                OnTime | Present => day_present += 1,
                Late => day_late += 1,
                Absent => day_absent += 1,
                OnLeave | HalfDay => {}
            }
        }
        present.push(day_present);
        late.push(day_late);
        absent.push(day_absent + absent_by_omission(active_members, day_records));
    }

    Ok(ChartData {
        labels: window.into_iter().map(day_label).collect(),
        series: vec![
            Series { name: "Present".into(), data: present },
            Series { name: "Late".into(), data: late },
            Series { name: "Absent".into(), data: absent },
        ],
    })
}

/// Created/Completed task counts per day over the trailing window.
pub fn task_daily_series(tasks: &[Task], days: u32, today: NaiveDate) -> Result<ChartData> {
    let window = daily_window(today, days)?;
    let created: Vec<u64> = window
        .iter()
        .map(|day| tasks.iter().filter(|t| t.created_at == *day).count() as u64)
        .collect();
    let completed: Vec<u64> = window
        .iter()
        .map(|day| tasks.iter().filter(|t| t.completed_on == Some(*day)).count() as u64)
        .collect();

    Ok(ChartData {
        labels: window.into_iter().map(day_label).collect(),
        series: vec![
            Series { name: "Created".into(), data: created },
            Series { name: "Completed".into(), data: completed },
        ],
    })
}

/// Created/Completed task counts per calendar month. The full trailing
/// window of `months` buckets is always emitted, empty months included.
pub fn task_monthly_series(tasks: &[Task], months: u32, today: NaiveDate) -> Result<ChartData> {
    let window = monthly_window(today, months)?;
    let created: Vec<u64> = window
        .iter()
        .map(|key| tasks.iter().filter(|t| month_key(t.created_at) == *key).count() as u64)
        .collect();
    let completed: Vec<u64> = window
        .iter()
        .map(|key| {
            tasks
                .iter()
                .filter(|t| t.completed_on.map(month_key) == Some(*key))
                .count() as u64
        })
        .collect();

    Ok(ChartData {
        labels: window.into_iter().map(|(y, m)| month_label(y, m)).collect(),
        series: vec![
            Series { name: "Created".into(), data: created },
            Series { name: "Completed".into(), data: completed },
        ],
    })
}

/// Present/Late record counts per calendar month. Absence is a per-day
/// rule and is not aggregated at month granularity.
pub fn attendance_monthly_series(
    records: &[AttendanceRecord],
    months: u32,
    today: NaiveDate,
) -> Result<ChartData> {
    let window = monthly_window(today, months)?;
    let present: Vec<u64> = window
        .iter()
        .map(|key| {
            records
                .iter()
                .filter(|r| month_key(r.date) == *key && r.status.counts_as_present())
                .count() as u64
        })
        .collect();
    let late: Vec<u64> = window
        .iter()
        .map(|key| {
            records
                .iter()
                .filter(|r| {
                    month_key(r.date) == *key && r.status == crate::model::AttendanceStatus::Late
                })
                .count() as u64
        })
        .collect();

    Ok(ChartData {
        labels: window.into_iter().map(|(y, m)| month_label(y, m)).collect(),
        series: vec![
            Series { name: "Present".into(), data: present },
            Series { name: "Late".into(), data: late },
        ],
    })
}
