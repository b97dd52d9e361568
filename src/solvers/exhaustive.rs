//! Exhaustive Solver
//!
//! Enumerates every combination of admissible payment options, drops the ones
//! that overrun a method's limit and keeps the best of the rest.

use std::time::Instant;

use humanize_duration::{Truncate, prelude::DurationExt};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{
    assignments::Assignment,
    orders::Order,
    payment_methods::PaymentMethods,
    solvers::{SearchStats, Solver, SolverError, SolverResult},
};

pub mod enumeration;
pub mod feasibility;
pub mod observer;
pub mod options;
pub mod ranking;

pub use enumeration::Candidates;
pub use feasibility::{Evaluation, evaluate};
pub use observer::{NoopObserver, SearchObserver};
pub use options::{OptionGenerator, PaymentOptions};
pub use ranking::CandidateRank;

/// Solver that searches every combination of payment options.
///
/// The search is exponential in the number of orders and meant for small batches.
#[derive(Debug)]
pub struct ExhaustiveSolver;

impl ExhaustiveSolver {
    /// Solve with an observer.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::PaymentMethod`] if the batch has no points pool.
    #[tracing::instrument(
        name = "exhaustive_solve",
        skip_all,
        fields(orders = orders.len(), methods = methods.len())
    )]
    pub fn solve_with_observer<'a>(
        orders: &'a [Order],
        methods: &'a PaymentMethods,
        observer: &mut dyn SearchObserver,
    ) -> Result<SolverResult<'a>, SolverError> {
        let start = Instant::now();
        let points_limit = methods.points_pool()?.limit;
        let generator = OptionGenerator::new(methods)?;

        let mut stats = SearchStats::default();
        let mut best: Option<(Vec<Assignment<'a>>, CandidateRank)> = None;

        for candidate in Candidates::new(generator, orders) {
            stats.candidates += 1;

            let evaluation = evaluate(&candidate, methods);
            observer.on_candidate(&candidate, &evaluation);

            if !evaluation.valid {
                continue;
            }

            stats.feasible += 1;

            let rank = CandidateRank::of(&candidate, points_limit);

            // Ties keep the earlier candidate.
            if best.as_ref().is_none_or(|(_, best_rank)| rank < *best_rank) {
                debug!(total_cost = %rank.total_cost, "new best candidate");
                observer.on_new_best(&candidate, &rank);
                best = Some((candidate, rank));
            }
        }

        let elapsed = start.elapsed();

        info!(
            candidates = stats.candidates,
            feasible = stats.feasible,
            elapsed = %elapsed.human(Truncate::Nano),
            "search finished"
        );

        let (assignments, total_cost) = best.map_or_else(
            || (Vec::new(), Decimal::ZERO),
            |(candidate, rank)| (candidate, rank.total_cost),
        );

        Ok(SolverResult {
            assignments,
            total_cost,
            stats,
        })
    }
}

impl Solver for ExhaustiveSolver {
    fn solve<'a>(
        orders: &'a [Order],
        methods: &'a PaymentMethods,
    ) -> Result<SolverResult<'a>, SolverError> {
        let mut observer = NoopObserver;

        Self::solve_with_observer(orders, methods, &mut observer)
    }
}
