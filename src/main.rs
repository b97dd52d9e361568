//! Tender CLI

use std::io;

use anyhow::Context;
use clap::Parser;
use tender::{
    config::{Cli, ReportFormat},
    loader::{load_orders, load_payment_methods},
    observability::init_subscriber,
    report::{Report, parse_currency},
    solvers::{Solver, exhaustive::ExhaustiveSolver},
    usage::UsageLedger,
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_subscriber(&cli.logging)?;

    let currency = parse_currency(&cli.currency)?;

    let orders = load_orders(&cli.orders)
        .with_context(|| format!("failed to load orders from {}", cli.orders.display()))?;

    let methods = load_payment_methods(&cli.payment_methods).with_context(|| {
        format!(
            "failed to load payment methods from {}",
            cli.payment_methods.display()
        )
    })?;

    let result = ExhaustiveSolver::solve(&orders, &methods)?;
    let ledger = UsageLedger::from_assignments(&methods, &result.assignments)?;
    let report = Report::new(&orders, &result.assignments, &ledger, &methods)?;

    let out = io::stdout().lock();

    match cli.format {
        ReportFormat::Plain => report.write_plain(out)?,
        ReportFormat::Table => report.write_table(out, currency)?,
    }

    Ok(())
}
