//! Candidate Ranking

use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::assignments::{Assignment, points_used, total_cost};

/// Sort key for a complete candidate. Smaller ranks are preferred.
///
/// Candidates whose total points usage fits within the points pool's limit
/// always rank ahead of those that exceed it; within the same group the
/// cheaper candidate wins. Equal ranks are ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateRank {
    /// Total points usage is within the points pool's starting limit
    pub points_valid: bool,

    /// Sum of the order costs
    pub total_cost: Decimal,
}

impl CandidateRank {
    /// Rank a candidate against the points pool's starting limit.
    pub fn of(candidate: &[Assignment<'_>], points_limit: Decimal) -> Self {
        Self {
            points_valid: points_used(candidate) <= points_limit,
            total_cost: total_cost(candidate),
        }
    }
}

impl Ord for CandidateRank {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .points_valid
            .cmp(&self.points_valid)
            .then_with(|| self.total_cost.cmp(&other.total_cost))
    }
}

impl PartialOrd for CandidateRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
