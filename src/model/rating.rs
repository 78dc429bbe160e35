use serde::{Deserialize, Serialize};

/// Periodic per-member rating. Every sub-score is nullable and on a 0-5
/// scale; aggregation pools whatever values are present (see
/// `stats::rating_stats`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub member_id: u64,
    pub quality: Option<f64>,
    pub punctuality: Option<f64>,
    pub reliability: Option<f64>,
    pub deadlines: Option<f64>,
}

impl Rating {
    /// The sub-scores that are actually populated, in declaration order.
    pub fn present_scores(&self) -> impl Iterator<Item = f64> + '_ {
        [self.quality, self.punctuality, self.reliability, self.deadlines]
            .into_iter()
            .flatten()
    }
}
