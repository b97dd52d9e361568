//! Order Records

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::orders::Order;

/// Order as stored in an input file. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct OrderRecord {
    /// Order identifier
    pub id: String,

    /// Order value, as a number or a decimal string
    pub value: Decimal,

    /// Payment methods with a promotion for this order
    #[serde(default)]
    pub promotions: Option<Vec<String>>,
}

impl From<OrderRecord> for Order {
    fn from(record: OrderRecord) -> Self {
        Order {
            id: record.id,
            value: record.value,
            promotions: record.promotions,
        }
    }
}
