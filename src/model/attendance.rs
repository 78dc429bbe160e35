use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum AttendanceStatus {
    #[serde(rename = "On Time")]
    #[strum(serialize = "On Time")]
    OnTime,
    #[serde(rename = "Present")]
    #[strum(serialize = "Present")]
    Present,
    #[serde(rename = "Late")]
    #[strum(serialize = "Late")]
    Late,
    #[serde(rename = "Absent")]
    #[strum(serialize = "Absent")]
    Absent,
    #[serde(rename = "On Leave")]
    #[strum(serialize = "On Leave")]
    OnLeave,
    #[serde(rename = "Half Day")]
    #[strum(serialize = "Half Day")]
    HalfDay,
}

impl AttendanceStatus {
    /// OnTime and Present both count toward the present bucket in aggregates.
    pub fn counts_as_present(&self) -> bool {
        matches!(self, AttendanceStatus::OnTime | AttendanceStatus::Present)
    }
}

/// One punch for one member on one date. A member with no record on a date
/// is treated as absent (see `status::absent_by_omission`); upstream keeps
/// at most one record per (member, date) — this layer does not deduplicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub member_id: u64,
    pub date: NaiveDate,
    pub check_in: Option<NaiveTime>,
    pub status: AttendanceStatus,
}
