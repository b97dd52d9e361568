//! Payment Method Records

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    loader::LoaderError, payment_methods::PaymentMethod, pricing::percent_from_points,
};

/// Payment method as stored in an input file. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct PaymentMethodRecord {
    /// Method identifier
    pub id: String,

    /// Whole-number discount percentage (0-100)
    pub discount: i64,

    /// Spending limit, as a number or a decimal string
    pub limit: Decimal,
}

impl TryFrom<PaymentMethodRecord> for PaymentMethod {
    type Error = LoaderError;

    fn try_from(record: PaymentMethodRecord) -> Result<Self, Self::Error> {
        if !(0..=100).contains(&record.discount) {
            return Err(LoaderError::InvalidDiscount {
                id: record.id,
                discount: record.discount,
            });
        }

        Ok(PaymentMethod::new(
            record.id,
            percent_from_points(record.discount),
            record.limit,
        ))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::loader::InputFormat;

    use super::*;

    #[test]
    fn parses_json_methods() -> TestResult {
        let json = r#"[{"id": "mZysk", "discount": 10, "limit": "1000.00", "note": "x"}]"#;

        let records: Vec<PaymentMethodRecord> = InputFormat::Json.parse(json)?;
        let methods = records
            .into_iter()
            .map(PaymentMethod::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let Some(method) = methods.first() else {
            return Err("expected one payment method".into());
        };

        assert_eq!(method.id, "mZysk");
        assert_eq!(method.limit, Decimal::new(1000_00, 2));
        assert_eq!(method.discount * Decimal::ONE, Decimal::new(10, 2));

        Ok(())
    }

    #[test]
    fn rejects_discount_out_of_range() {
        let record = PaymentMethodRecord {
            id: "Broken".to_string(),
            discount: 120,
            limit: Decimal::ONE,
        };

        assert!(matches!(
            PaymentMethod::try_from(record),
            Err(LoaderError::InvalidDiscount { discount: 120, .. })
        ));
    }
}
