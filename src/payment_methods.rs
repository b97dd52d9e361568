//! Payment Methods

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use thiserror::Error;

/// Identifier of the loyalty points pool.
pub const POINTS_METHOD: &str = "PUNKTY";

/// Identifier of the card that may be combined with points for the combo discount.
pub const COMBO_METHOD: &str = "mZysk";

/// Errors raised while building or querying the payment method registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentMethodError {
    /// No payment method exists with the requested identifier.
    #[error("payment method not found: {0}")]
    NotFound(String),

    /// The same identifier was supplied more than once.
    #[error("duplicate payment method: {0}")]
    DuplicateId(String),
}

/// A payment method with its discount and spending limit for the whole batch.
#[derive(Debug, Clone)]
pub struct PaymentMethod {
    /// Unique identifier
    pub id: String,

    /// Discount granted when an order is paid in full with this method
    pub discount: Percentage,

    /// Maximum total amount payable through this method
    pub limit: Decimal,
}

impl PaymentMethod {
    /// Create a new payment method.
    pub fn new(id: impl Into<String>, discount: Percentage, limit: Decimal) -> Self {
        Self {
            id: id.into(),
            discount,
            limit,
        }
    }

    /// Whether this entry is the loyalty points pool.
    pub fn is_points_pool(&self) -> bool {
        self.id == POINTS_METHOD
    }
}

/// Payment methods in input order, indexed by identifier.
#[derive(Debug, Clone, Default)]
pub struct PaymentMethods {
    methods: Vec<PaymentMethod>,
    index: FxHashMap<String, usize>,
}

impl PaymentMethods {
    /// Build the registry.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentMethodError::DuplicateId`] if two methods share an identifier.
    pub fn new(methods: impl Into<Vec<PaymentMethod>>) -> Result<Self, PaymentMethodError> {
        let methods = methods.into();
        let mut index = FxHashMap::default();

        for (idx, method) in methods.iter().enumerate() {
            if index.insert(method.id.clone(), idx).is_some() {
                return Err(PaymentMethodError::DuplicateId(method.id.clone()));
            }
        }

        Ok(Self { methods, index })
    }

    /// Lookup a method by identifier.
    pub fn get(&self, id: &str) -> Option<&PaymentMethod> {
        self.index.get(id).and_then(|&idx| self.methods.get(idx))
    }

    /// Lookup a method that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentMethodError::NotFound`] if no method has this identifier.
    pub fn require(&self, id: &str) -> Result<&PaymentMethod, PaymentMethodError> {
        self.get(id)
            .ok_or_else(|| PaymentMethodError::NotFound(id.to_string()))
    }

    /// The loyalty points pool.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentMethodError::NotFound`] if the batch defines no points pool.
    pub fn points_pool(&self) -> Result<&PaymentMethod, PaymentMethodError> {
        self.require(POINTS_METHOD)
    }

    /// The combo card, if the batch defines one.
    pub fn combo_method(&self) -> Option<&PaymentMethod> {
        self.get(COMBO_METHOD)
    }

    /// Iterate over the methods in input order.
    pub fn iter(&self) -> impl Iterator<Item = &PaymentMethod> {
        self.methods.iter()
    }

    /// Methods in reporting order: the combo card, the other cards in input order,
    /// then the points pool.
    pub fn display_order(&self) -> SmallVec<[&PaymentMethod; 8]> {
        let combo = self.combo_method();
        let cards = self
            .methods
            .iter()
            .filter(|method| method.id != COMBO_METHOD && !method.is_points_pool());
        let points = self.get(POINTS_METHOD);

        combo.into_iter().chain(cards).chain(points).collect()
    }

    /// Number of methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Whether there are no methods.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::pricing::percent_from_points;

    use super::*;

    fn test_methods() -> Vec<PaymentMethod> {
        vec![
            PaymentMethod::new(POINTS_METHOD, percent_from_points(0), Decimal::new(50_00, 2)),
            PaymentMethod::new("BosBankrut", percent_from_points(5), Decimal::new(500_00, 2)),
            PaymentMethod::new(COMBO_METHOD, percent_from_points(10), Decimal::new(1000_00, 2)),
        ]
    }

    #[test]
    fn lookup_by_id() -> TestResult {
        let methods = PaymentMethods::new(test_methods())?;

        assert_eq!(methods.len(), 3);
        assert_eq!(methods.require(COMBO_METHOD)?.limit, Decimal::new(1000_00, 2));
        assert!(methods.points_pool()?.is_points_pool());

        Ok(())
    }

    #[test]
    fn missing_id_is_a_lookup_failure() -> TestResult {
        let methods = PaymentMethods::new(test_methods())?;

        assert_eq!(
            methods.require("Unknown").err(),
            Some(PaymentMethodError::NotFound("Unknown".to_string()))
        );

        Ok(())
    }

    #[test]
    fn missing_points_pool_is_reported() -> TestResult {
        let methods = PaymentMethods::new(vec![PaymentMethod::new(
            COMBO_METHOD,
            percent_from_points(10),
            Decimal::ONE,
        )])?;

        assert!(matches!(
            methods.points_pool(),
            Err(PaymentMethodError::NotFound(_))
        ));

        Ok(())
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut methods = test_methods();
        methods.push(PaymentMethod::new(POINTS_METHOD, percent_from_points(0), Decimal::ONE));

        assert_eq!(
            PaymentMethods::new(methods).err(),
            Some(PaymentMethodError::DuplicateId(POINTS_METHOD.to_string()))
        );
    }

    #[test]
    fn empty_registry() -> TestResult {
        let methods = PaymentMethods::new(Vec::new())?;

        assert!(methods.is_empty());
        assert!(methods.combo_method().is_none());

        Ok(())
    }

    #[test]
    fn display_order_puts_combo_first_and_points_last() -> TestResult {
        let methods = PaymentMethods::new(test_methods())?;

        let ids: Vec<&str> = methods
            .display_order()
            .iter()
            .map(|method| method.id.as_str())
            .collect();

        assert_eq!(ids, [COMBO_METHOD, "BosBankrut", POINTS_METHOD]);

        Ok(())
    }
}
