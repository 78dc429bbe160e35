use std::collections::{HashMap, HashSet};

use crate::model::Member;

pub const UNKNOWN_MEMBER: &str = "Unknown";

/// Lookup structure built once per call from the member snapshot: resolves
/// assignee ids to display names and departments to member-id sets.
pub struct MemberIndex<'a> {
    by_id: HashMap<u64, &'a Member>,
    active: u64,
}

impl<'a> MemberIndex<'a> {
    pub fn new(members: &'a [Member]) -> Self {
        let by_id = members.iter().map(|m| (m.id, m)).collect();
        let active = members.iter().filter(|m| m.is_active()).count() as u64;
        Self { by_id, active }
    }

    pub fn active_count(&self) -> u64 {
        self.active
    }

    pub fn get(&self, id: u64) -> Option<&Member> {
        self.by_id.get(&id).copied()
    }

    /// Resolves a member id to a display name. An unresolvable id is a
    /// data-integrity signal, logged and mapped to "Unknown" rather than
    /// failing the aggregation.
    pub fn resolve_name(&self, id: u64) -> &str {
        match self.by_id.get(&id) {
            Some(m) => m.name.as_str(),
            None => {
                tracing::warn!(member_id = id, "Unresolvable member reference");
                UNKNOWN_MEMBER
            }
        }
    }

    /// Ids of members in the given department, matched case-insensitively.
    /// Members without a department belong to "Unassigned".
    pub fn department_members(&self, department: &str) -> HashSet<u64> {
        let wanted = department.to_lowercase();
        self.by_id
            .values()
            .filter(|m| m.department_name().to_lowercase() == wanted)
            .map(|m| m.id)
            .collect()
    }
}
