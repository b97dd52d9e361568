//! Orders

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when resolving orders.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// No order exists with the requested identifier.
    #[error("order not found: {0}")]
    NotFound(String),
}

/// An order to be paid.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Unique identifier
    pub id: String,

    /// Order value before any discount
    pub value: Decimal,

    /// Payment methods with a promotion for this order.
    ///
    /// `None` when the order carries no promotions list at all, which is what
    /// makes the points + combo card split available.
    pub promotions: Option<Vec<String>>,
}

impl Order {
    /// Create an order without a promotions list.
    pub fn new(id: impl Into<String>, value: Decimal) -> Self {
        Self {
            id: id.into(),
            value,
            promotions: None,
        }
    }

    /// Create an order eligible for the given promotions.
    pub fn with_promotions<I, S>(id: impl Into<String>, value: Decimal, promotions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            value,
            promotions: Some(promotions.into_iter().map(Into::into).collect()),
        }
    }

    /// Promotion identifiers, empty when the list is absent.
    pub fn promotion_ids(&self) -> impl Iterator<Item = &str> {
        self.promotions.iter().flatten().map(String::as_str)
    }
}

/// Find an order by identifier.
///
/// # Errors
///
/// Returns [`OrderError::NotFound`] if no order has this identifier.
pub fn find_order<'a>(orders: &'a [Order], id: &str) -> Result<&'a Order, OrderError> {
    orders
        .iter()
        .find(|order| order.id == id)
        .ok_or_else(|| OrderError::NotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn find_order_by_id() -> TestResult {
        let orders = [
            Order::with_promotions("1", Decimal::new(100_00, 2), ["mZysk"]),
            Order::new("2", Decimal::new(20_00, 2)),
        ];

        assert_eq!(find_order(&orders, "2")?.value, Decimal::new(20_00, 2));
        assert_eq!(
            find_order(&orders, "3"),
            Err(OrderError::NotFound("3".to_string()))
        );

        Ok(())
    }

    #[test]
    fn promotion_ids_handles_absent_list() {
        let without = Order::new("1", Decimal::ONE);
        let with = Order::with_promotions("2", Decimal::ONE, ["mZysk", "BosBankrut"]);

        assert_eq!(without.promotion_ids().count(), 0);
        assert_eq!(
            with.promotion_ids().collect::<Vec<_>>(),
            ["mZysk", "BosBankrut"]
        );
    }

    #[test]
    fn empty_list_is_not_absent() {
        let order = Order::with_promotions("1", Decimal::ONE, Vec::<String>::new());

        assert_eq!(order.promotions, Some(Vec::new()));
    }
}
