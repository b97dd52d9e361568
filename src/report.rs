//! Report

use std::io;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    assignments::Assignment,
    orders::{Order, OrderError, find_order},
    payment_methods::{POINTS_METHOD, PaymentMethods},
    pricing::{format_amount, round_currency},
    usage::UsageLedger,
};

/// Errors that can occur when building or writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// An assignment names an order that is not in the batch.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// Currency code without a known ISO currency.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Amount that does not fit in minor units.
    #[error("Amount out of range: {0}")]
    AmountOutOfRange(Decimal),

    /// IO error
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Look up a supported ISO currency by code.
///
/// # Errors
///
/// Returns [`ReportError::UnknownCurrency`] for any other code.
pub fn parse_currency(code: &str) -> Result<&'static Currency, ReportError> {
    match code {
        "PLN" => Ok(iso::PLN),
        "GBP" => Ok(iso::GBP),
        "USD" => Ok(iso::USD),
        "EUR" => Ok(iso::EUR),
        other => Err(ReportError::UnknownCurrency(other.to_string())),
    }
}

fn to_money(
    amount: Decimal,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, ReportError> {
    let minor_units = round_currency(amount)
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|minor| minor.to_i64())
        .ok_or(ReportError::AmountOutOfRange(amount))?;

    Ok(Money::from_minor(minor_units, currency))
}

/// One paid order with the portions charged to each method.
#[derive(Debug, Clone)]
struct OrderLine<'a> {
    order: &'a Order,
    assignment: Assignment<'a>,
}

impl<'a> OrderLine<'a> {
    /// Non-zero portions, points first.
    fn portions(&self) -> SmallVec<[(&'a str, Decimal); 2]> {
        let mut portions = SmallVec::new();

        if self.assignment.points > Decimal::ZERO {
            portions.push((POINTS_METHOD, self.assignment.points));
        }

        if self.assignment.card > Decimal::ZERO {
            portions.push((self.assignment.method, self.assignment.card));
        }

        portions
    }
}

/// Outcome of a batch: per-order payments followed by per-method usage.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    lines: Vec<OrderLine<'a>>,
    summary: Vec<(&'a str, Decimal)>,
}

impl<'a> Report<'a> {
    /// Build a report for the winning assignments.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Order`] if an assignment names an unknown order.
    pub fn new(
        orders: &'a [Order],
        assignments: &[Assignment<'a>],
        ledger: &UsageLedger,
        methods: &'a PaymentMethods,
    ) -> Result<Self, ReportError> {
        let lines = assignments
            .iter()
            .map(|assignment| {
                Ok(OrderLine {
                    order: find_order(orders, assignment.order_id)?,
                    assignment: *assignment,
                })
            })
            .collect::<Result<Vec<_>, ReportError>>()?;

        Ok(Self {
            lines,
            summary: ledger.summary(methods),
        })
    }

    /// Per-method usage, in reporting order.
    pub fn summary(&self) -> &[(&'a str, Decimal)] {
        &self.summary
    }

    /// Write the plain-text report.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] if writing fails.
    pub fn write_plain(&self, mut out: impl io::Write) -> Result<(), ReportError> {
        if self.lines.is_empty() {
            writeln!(out, "No optimal assignments found.")?;
        }

        for line in &self.lines {
            let id = &line.order.id;

            writeln!(
                out,
                "Processing order: {id}, Value: {}",
                format_amount(line.order.value)
            )?;

            for (method, amount) in line.portions() {
                writeln!(
                    out,
                    "Selected payment method for {id}: {method} Amount: {}",
                    format_amount(amount)
                )?;
            }
        }

        for (method, amount) in &self.summary {
            writeln!(out, "{method} {}", format_amount(*amount))?;
        }

        Ok(())
    }

    /// Write the report as tables with amounts in `currency`.
    ///
    /// # Errors
    ///
    /// Returns a [`ReportError`] if an amount cannot be converted or writing fails.
    pub fn write_table(
        &self,
        mut out: impl io::Write,
        currency: &'static Currency,
    ) -> Result<(), ReportError> {
        let mut builder = Builder::default();
        builder.push_record(["Order", "Value", "Method", "Amount"]);

        for line in &self.lines {
            let value = to_money(line.order.value, currency)?.to_string();

            for (method, amount) in line.portions() {
                builder.push_record([
                    line.order.id.clone(),
                    value.clone(),
                    method.to_string(),
                    to_money(amount, currency)?.to_string(),
                ]);
            }
        }

        if self.lines.is_empty() {
            writeln!(out, "No optimal assignments found.")?;
        } else {
            let mut table = builder.build();
            table.with(Style::modern_rounded());
            table.modify(Columns::new(1..2), Alignment::right());
            table.modify(Columns::new(3..4), Alignment::right());

            writeln!(out, "{table}")?;
        }

        let mut usage = Builder::default();
        usage.push_record(["Method", "Used"]);

        for (method, amount) in &self.summary {
            usage.push_record([method.to_string(), to_money(*amount, currency)?.to_string()]);
        }

        let mut table = usage.build();
        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..2), Alignment::right());

        writeln!(out, "{table}")?;

        Ok(())
    }
}
