//! Payment Options
//!
//! Every admissible way of paying a single order, given the points already
//! committed by earlier orders in the candidate being built.

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy};
use smallvec::SmallVec;

use crate::{
    assignments::Assignment,
    orders::Order,
    payment_methods::{PaymentMethod, PaymentMethodError, PaymentMethods},
    pricing::{CURRENCY_SCALE, discounted_cost, percent_from_points},
};

/// Discount granted when an order is split between points and the combo card.
pub fn combo_discount() -> Percentage {
    percent_from_points(10)
}

/// Points committed by the first split payment of a candidate (15.00).
pub const MIN_POINTS_USAGE: Decimal = Decimal::from_parts(1500, 0, 0, false, 2);

/// Options for one order. Most orders have between one and four.
pub type PaymentOptions<'a> = SmallVec<[Assignment<'a>; 4]>;

/// Generates the admissible payment options for an order.
#[derive(Debug, Clone, Copy)]
pub struct OptionGenerator<'a> {
    methods: &'a PaymentMethods,
    points_pool: &'a PaymentMethod,
    combo: Option<&'a PaymentMethod>,
}

impl<'a> OptionGenerator<'a> {
    /// Create a generator over the given payment methods.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentMethodError::NotFound`] if there is no points pool.
    pub fn new(methods: &'a PaymentMethods) -> Result<Self, PaymentMethodError> {
        Ok(Self {
            methods,
            points_pool: methods.points_pool()?,
            combo: methods.combo_method(),
        })
    }

    /// All options for `order` when `used_points` are already committed.
    ///
    /// Options come out in a fixed order: points only, one card option per
    /// promotion in list order, then the points + combo card split.
    pub fn options(&self, order: &'a Order, used_points: Decimal) -> PaymentOptions<'a> {
        let mut options = PaymentOptions::new();
        let remaining_points = self.points_pool.limit - used_points;

        if let Some(option) = self.points_only(order, remaining_points) {
            options.push(option);
        }

        options.extend(self.promotion_cards(order));

        if let Some(option) = self.combo_split(order, used_points, remaining_points) {
            options.push(option);
        }

        options
    }

    fn points_only(&self, order: &'a Order, remaining_points: Decimal) -> Option<Assignment<'a>> {
        (remaining_points >= order.value).then(|| {
            Assignment::points_only(
                &order.id,
                discounted_cost(order.value, self.points_pool.discount),
            )
        })
    }

    /// Card options are admitted against the method's full limit, not what is
    /// left of it; the limit check catches overspending later. A promotion naming
    /// the points pool yields a card option charged to the pool.
    fn promotion_cards(&self, order: &'a Order) -> impl Iterator<Item = Assignment<'a>> {
        let methods = self.methods;

        order
            .promotion_ids()
            .filter_map(move |id| methods.get(id))
            .filter(move |method| method.limit >= order.value)
            .map(move |method| {
                Assignment::card_only(
                    &order.id,
                    &method.id,
                    discounted_cost(order.value, method.discount),
                )
            })
    }

    fn combo_split(
        &self,
        order: &'a Order,
        used_points: Decimal,
        remaining_points: Decimal,
    ) -> Option<Assignment<'a>> {
        if order.promotions.is_some() {
            return None;
        }

        let combo = self.combo?;
        let payable_share = Decimal::ONE - combo_discount() * Decimal::ONE;
        let target_cost = order.value * payable_share;

        let points = if used_points.is_zero() {
            MIN_POINTS_USAGE
        } else {
            remaining_points.min(target_cost)
        };

        if points <= Decimal::ZERO || points > remaining_points {
            return None;
        }

        let card = target_cost - points;
        let required_limit = card
            .checked_div(payable_share)?
            .round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);

        (card >= Decimal::ZERO && combo.limit >= required_limit)
            .then(|| Assignment::split(&order.id, &combo.id, points, card))
    }
}
