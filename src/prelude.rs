//! Tender prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    assignments::Assignment,
    loader::{LoaderError, load_orders, load_payment_methods},
    orders::{Order, OrderError, find_order},
    payment_methods::{
        COMBO_METHOD, POINTS_METHOD, PaymentMethod, PaymentMethodError, PaymentMethods,
    },
    report::{Report, ReportError},
    solvers::{
        SearchStats, Solver, SolverError, SolverResult,
        exhaustive::{ExhaustiveSolver, NoopObserver, SearchObserver},
    },
    usage::UsageLedger,
};
