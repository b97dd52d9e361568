//! Assignments

use rust_decimal::Decimal;

use crate::payment_methods::POINTS_METHOD;

/// The payment chosen for a single order.
///
/// A split payment draws `points` from the points pool and `card` from `method`.
/// Single-method payments leave the other portion at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment<'a> {
    /// Identifier of the paid order
    pub order_id: &'a str,

    /// Identifier of the method charged for the card portion
    pub method: &'a str,

    /// Amount drawn from the points pool
    pub points: Decimal,

    /// Amount charged to `method`
    pub card: Decimal,

    /// Total charged for the order (`points + card`)
    pub cost: Decimal,
}

impl<'a> Assignment<'a> {
    /// Pay the whole discounted cost with points.
    pub fn points_only(order_id: &'a str, cost: Decimal) -> Self {
        Self {
            order_id,
            method: POINTS_METHOD,
            points: cost,
            card: Decimal::ZERO,
            cost,
        }
    }

    /// Pay the whole discounted cost with a single card.
    pub fn card_only(order_id: &'a str, method: &'a str, cost: Decimal) -> Self {
        Self {
            order_id,
            method,
            points: Decimal::ZERO,
            card: cost,
            cost,
        }
    }

    /// Pay part of the cost with points and the rest with `method`.
    pub fn split(order_id: &'a str, method: &'a str, points: Decimal, card: Decimal) -> Self {
        Self {
            order_id,
            method,
            points,
            card,
            cost: points + card,
        }
    }
}

/// Sum of the points portions.
pub fn points_used(assignments: &[Assignment<'_>]) -> Decimal {
    assignments.iter().map(|assignment| assignment.points).sum()
}

/// Sum of the order costs.
pub fn total_cost(assignments: &[Assignment<'_>]) -> Decimal {
    assignments.iter().map(|assignment| assignment.cost).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portions_add_up_to_cost() {
        let split = Assignment::split("1", "mZysk", Decimal::new(15_00, 2), Decimal::new(30_00, 2));

        assert_eq!(split.cost, Decimal::new(45_00, 2));
        assert_eq!(split.points + split.card, split.cost);
    }

    #[test]
    fn points_usage_sums_points_portions() {
        let assignments = [
            Assignment::split("1", "mZysk", Decimal::new(10_00, 2), Decimal::new(90_00, 2)),
            Assignment::points_only("2", Decimal::new(20_00, 2)),
        ];

        assert_eq!(points_used(&assignments), Decimal::new(30_00, 2));
    }

    #[test]
    fn total_cost_sums_costs() {
        let assignments = [
            Assignment::card_only("1", "mZysk", Decimal::new(90_00, 2)),
            Assignment::card_only("2", "BosBankrut", Decimal::new(95_00, 2)),
        ];

        assert_eq!(total_cost(&assignments), Decimal::new(185_00, 2));
    }

    #[test]
    fn empty_candidate_costs_nothing() {
        assert_eq!(total_cost(&[]), Decimal::ZERO);
        assert_eq!(points_used(&[]), Decimal::ZERO);
    }
}
