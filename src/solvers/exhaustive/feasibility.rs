//! Limit Feasibility
//!
//! Replays a candidate against the starting limit of every payment method.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::{
    assignments::{Assignment, total_cost},
    payment_methods::{POINTS_METHOD, PaymentMethods},
};

/// Outcome of replaying a candidate against the method limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Whether every portion fitted within what was left of its method's limit
    pub valid: bool,

    /// Sum of every assignment's cost, valid or not
    pub total_cost: Decimal,
}

/// Check a complete candidate against the payment method limits.
///
/// Limits are seeded fresh for every call and depleted assignment by assignment.
/// The points portion draws from the points pool and the card portion from the
/// named method. A points-only assignment touches the pool once. Checking stops
/// at the first portion that does not fit; unknown methods have no capacity.
pub fn evaluate(candidate: &[Assignment<'_>], methods: &PaymentMethods) -> Evaluation {
    let mut remaining: FxHashMap<&str, Decimal> = methods
        .iter()
        .map(|method| (method.id.as_str(), method.limit))
        .collect();

    let valid = candidate
        .iter()
        .all(|assignment| try_draw(&mut remaining, assignment));

    Evaluation {
        valid,
        total_cost: total_cost(candidate),
    }
}

fn try_draw(remaining: &mut FxHashMap<&str, Decimal>, assignment: &Assignment<'_>) -> bool {
    let points_left = remaining.get(POINTS_METHOD).copied().unwrap_or_default();
    let card_left = remaining.get(assignment.method).copied().unwrap_or_default();

    if assignment.points > points_left || assignment.card > card_left {
        return false;
    }

    if let Some(points) = remaining.get_mut(POINTS_METHOD) {
        *points -= assignment.points;
    }

    if assignment.method != POINTS_METHOD
        && let Some(card) = remaining.get_mut(assignment.method)
    {
        *card -= assignment.card;
    }

    true
}
