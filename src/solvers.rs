//! Solvers for Payment Assignment

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    assignments::Assignment,
    orders::Order,
    payment_methods::{PaymentMethodError, PaymentMethods},
};

pub mod exhaustive;

/// Solver Errors
#[derive(Debug, Error)]
pub enum SolverError {
    /// Wrapped payment method lookup error
    #[error(transparent)]
    PaymentMethod(#[from] PaymentMethodError),
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Complete candidates produced by the enumeration
    pub candidates: usize,

    /// Candidates that passed the limit check
    pub feasible: usize,
}

/// Best payment assignment found for a batch of orders
#[derive(Debug, Clone)]
pub struct SolverResult<'a> {
    /// One assignment per order in input order, or empty when no feasible
    /// assignment exists
    pub assignments: Vec<Assignment<'a>>,

    /// Total charged across all orders
    pub total_cost: Decimal,

    /// Search counters
    pub stats: SearchStats,
}

impl SolverResult<'_> {
    /// Whether any assignment was found.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

/// Trait for assigning payment methods to a batch of orders
pub trait Solver {
    /// Solve the payment assignment for the given orders
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] if the solver encounters an error.
    fn solve<'a>(
        orders: &'a [Order],
        methods: &'a PaymentMethods,
    ) -> Result<SolverResult<'a>, SolverError>;
}
