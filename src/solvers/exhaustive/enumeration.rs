//! Candidate Enumeration
//!
//! Depth-first backtracking over the options of each order, driven by an
//! explicit stack so candidates stream out one at a time.

use rust_decimal::Decimal;

use crate::{
    assignments::{Assignment, points_used},
    orders::Order,
    solvers::exhaustive::options::{OptionGenerator, PaymentOptions},
};

/// Options for one order together with the next one to try.
#[derive(Debug)]
struct Frame<'a> {
    options: PaymentOptions<'a>,
    next: usize,
}

/// Lazily yields every complete candidate: one option per order, in order input order.
///
/// An order with no admissible option ends its branch without yielding anything.
/// A batch with no orders yields a single empty candidate.
#[derive(Debug)]
pub struct Candidates<'a> {
    generator: OptionGenerator<'a>,
    orders: &'a [Order],
    partial: Vec<Assignment<'a>>,
    frames: Vec<Frame<'a>>,
    empty_batch_pending: bool,
}

impl<'a> Candidates<'a> {
    /// Start enumerating candidates for `orders`.
    pub fn new(generator: OptionGenerator<'a>, orders: &'a [Order]) -> Self {
        let mut frames = Vec::with_capacity(orders.len());

        if let Some(first) = orders.first() {
            frames.push(Frame {
                options: generator.options(first, Decimal::ZERO),
                next: 0,
            });
        }

        Self {
            generator,
            orders,
            partial: Vec::with_capacity(orders.len()),
            frames,
            empty_batch_pending: orders.is_empty(),
        }
    }
}

impl<'a> Iterator for Candidates<'a> {
    type Item = Vec<Assignment<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.empty_batch_pending {
            self.empty_batch_pending = false;
            return Some(Vec::new());
        }

        loop {
            let depth = self.frames.len().checked_sub(1)?;
            let frame = self.frames.last_mut()?;

            let Some(option) = frame.options.get(frame.next).copied() else {
                self.frames.pop();
                continue;
            };

            frame.next += 1;

            self.partial.truncate(depth);
            self.partial.push(option);

            let Some(order) = self.orders.get(depth + 1) else {
                return Some(self.partial.clone());
            };

            let options = self.generator.options(order, points_used(&self.partial));
            self.frames.push(Frame { options, next: 0 });
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        payment_methods::{COMBO_METHOD, POINTS_METHOD, PaymentMethod, PaymentMethods},
        pricing::percent_from_points,
    };

    use super::*;

    fn test_methods() -> TestResult<PaymentMethods> {
        Ok(PaymentMethods::new(vec![
            PaymentMethod::new(POINTS_METHOD, percent_from_points(15), Decimal::new(100_00, 2)),
            PaymentMethod::new(COMBO_METHOD, percent_from_points(10), Decimal::new(180_00, 2)),
            PaymentMethod::new("BosBankrut", percent_from_points(5), Decimal::new(200_00, 2)),
        ])?)
    }

    fn methods_of(candidate: &[Assignment<'_>]) -> Vec<String> {
        candidate
            .iter()
            .map(|assignment| assignment.method.to_string())
            .collect()
    }

    #[test]
    fn yields_cartesian_product_in_option_order() -> TestResult {
        let methods = test_methods()?;
        let generator = OptionGenerator::new(&methods)?;
        let orders = [
            Order::with_promotions("1", Decimal::new(150_00, 2), [COMBO_METHOD, "BosBankrut"]),
            Order::with_promotions("2", Decimal::new(120_00, 2), ["BosBankrut", COMBO_METHOD]),
        ];

        let candidates: Vec<_> = Candidates::new(generator, &orders).collect();

        let expected = [
            [COMBO_METHOD, "BosBankrut"],
            [COMBO_METHOD, COMBO_METHOD],
            ["BosBankrut", "BosBankrut"],
            ["BosBankrut", COMBO_METHOD],
        ];

        assert_eq!(candidates.len(), 4);

        for (candidate, expected) in candidates.iter().zip(expected) {
            assert_eq!(methods_of(candidate), expected);
            assert_eq!(candidate.len(), orders.len());
        }

        Ok(())
    }

    #[test]
    fn later_options_depend_on_points_already_used() -> TestResult {
        let methods = test_methods()?;
        let generator = OptionGenerator::new(&methods)?;
        let orders = [
            Order::with_promotions("1", Decimal::new(100_00, 2), ["BosBankrut"]),
            Order::new("2", Decimal::new(50_00, 2)),
        ];

        let candidates: Vec<_> = Candidates::new(generator, &orders).collect();

        // Points-only on the first order leaves 15.00 points: the second order
        // can only be split. A card on the first order leaves both options open.
        let shapes: Vec<_> = candidates.iter().map(|candidate| methods_of(candidate)).collect();

        assert_eq!(
            shapes,
            [
                vec![POINTS_METHOD, COMBO_METHOD],
                vec!["BosBankrut", POINTS_METHOD],
                vec!["BosBankrut", COMBO_METHOD],
            ]
        );

        Ok(())
    }

    #[test]
    fn order_without_options_yields_nothing() -> TestResult {
        let methods = test_methods()?;
        let generator = OptionGenerator::new(&methods)?;
        let orders = [
            Order::with_promotions("1", Decimal::new(100_00, 2), ["BosBankrut"]),
            Order::with_promotions("2", Decimal::new(5000_00, 2), ["BosBankrut"]),
        ];

        assert_eq!(Candidates::new(generator, &orders).count(), 0);

        Ok(())
    }

    #[test]
    fn empty_batch_yields_one_empty_candidate() -> TestResult {
        let methods = test_methods()?;
        let generator = OptionGenerator::new(&methods)?;

        let orders: [Order; 0] = [];

        let candidates: Vec<_> = Candidates::new(generator, &orders).collect();

        assert_eq!(candidates, vec![Vec::new()]);

        Ok(())
    }
}
