use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum MemberStatus {
    #[serde(rename = "active")]
    #[strum(serialize = "active")]
    Active,
    #[serde(rename = "inactive")]
    #[strum(serialize = "inactive")]
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: u64,
    pub name: String,
    /// Resolves to "Unassigned" wherever a display value is needed.
    pub department: Option<String>,
    pub status: MemberStatus,
    pub photo: Option<String>,
}

impl Member {
    pub const UNASSIGNED: &'static str = "Unassigned";

    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }

    pub fn department_name(&self) -> &str {
        self.department.as_deref().unwrap_or(Self::UNASSIGNED)
    }
}
