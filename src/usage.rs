//! Usage
//!
//! Per-method totals consumed by the winning assignment.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::{
    assignments::Assignment,
    payment_methods::{POINTS_METHOD, PaymentMethodError, PaymentMethods},
    pricing::round_currency,
};

/// Amount consumed from one payment method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Usage {
    amount: Decimal,
}

impl Usage {
    /// Add to the consumed amount.
    pub fn add(&mut self, value: Decimal) {
        self.amount += value;
    }

    /// Consumed amount rounded to currency precision.
    pub fn amount(&self) -> Decimal {
        round_currency(self.amount)
    }
}

/// Usage of every payment method in a batch.
#[derive(Debug, Clone, Default)]
pub struct UsageLedger {
    usage: FxHashMap<String, Usage>,
}

impl UsageLedger {
    /// Start a ledger with zero usage for every method.
    pub fn new(methods: &PaymentMethods) -> Self {
        Self {
            usage: methods
                .iter()
                .map(|method| (method.id.clone(), Usage::default()))
                .collect(),
        }
    }

    /// Build a ledger from the winning assignments.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentMethodError::NotFound`] if an assignment names a method
    /// that is not in `methods`.
    pub fn from_assignments(
        methods: &PaymentMethods,
        assignments: &[Assignment<'_>],
    ) -> Result<Self, PaymentMethodError> {
        let mut ledger = Self::new(methods);

        for assignment in assignments {
            ledger.record(assignment)?;
        }

        Ok(ledger)
    }

    /// Add an assignment's portions to the methods it draws from.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentMethodError::NotFound`] if a non-zero portion names an
    /// unknown method.
    pub fn record(&mut self, assignment: &Assignment<'_>) -> Result<(), PaymentMethodError> {
        if assignment.points > Decimal::ZERO {
            self.usage_mut(POINTS_METHOD)?.add(assignment.points);
        }

        if assignment.card > Decimal::ZERO {
            self.usage_mut(assignment.method)?.add(assignment.card);
        }

        Ok(())
    }

    fn usage_mut(&mut self, id: &str) -> Result<&mut Usage, PaymentMethodError> {
        self.usage
            .get_mut(id)
            .ok_or_else(|| PaymentMethodError::NotFound(id.to_string()))
    }

    /// Rounded usage of a method, zero for unknown methods.
    pub fn amount(&self, id: &str) -> Decimal {
        self.usage.get(id).map(Usage::amount).unwrap_or_default()
    }

    /// Unrounded sum over all methods.
    pub fn total(&self) -> Decimal {
        self.usage.values().map(|usage| usage.amount).sum()
    }

    /// Non-zero usages in reporting order.
    pub fn summary<'m>(&self, methods: &'m PaymentMethods) -> Vec<(&'m str, Decimal)> {
        methods
            .display_order()
            .into_iter()
            .map(|method| (method.id.as_str(), self.amount(&method.id)))
            .filter(|(_, amount)| !amount.is_zero())
            .collect()
    }
}
