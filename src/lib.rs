//! Tender
//!
//! Tender picks the cheapest way to pay for a batch of orders from a set of payment
//! methods: a shared loyalty points pool, promotional cards and a points-plus-card split.

pub mod assignments;
pub mod config;
pub mod loader;
pub mod observability;
pub mod orders;
pub mod payment_methods;
pub mod prelude;
pub mod pricing;
pub mod report;
pub mod solvers;
pub mod usage;
