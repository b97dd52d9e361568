//! Loader
//!
//! Reads orders and payment methods from JSON or YAML files.

use std::{fs, path::Path};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use crate::{
    orders::Order,
    payment_methods::{PaymentMethodError, PaymentMethods},
};

pub mod orders;
pub mod payment_methods;

/// Loader Errors
#[derive(Debug, Error)]
pub enum LoaderError {
    /// IO error reading an input file
    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Discount outside the 0-100 percent range
    #[error("Invalid discount for payment method {id}: {discount}")]
    InvalidDiscount {
        /// Payment method identifier
        id: String,

        /// Discount as read from the input
        discount: i64,
    },

    /// Invalid payment method set
    #[error(transparent)]
    PaymentMethod(#[from] PaymentMethodError),
}

/// Input file encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON document
    Json,

    /// YAML document
    Yaml,
}

impl InputFormat {
    /// Pick the format from the file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml" | "yaml") => InputFormat::Yaml,
            _ => InputFormat::Json,
        }
    }

    /// Parse a document in this format.
    ///
    /// # Errors
    ///
    /// Returns a [`LoaderError`] if the document is malformed.
    pub fn parse<T: DeserializeOwned>(self, contents: &str) -> Result<T, LoaderError> {
        Ok(match self {
            InputFormat::Json => serde_json::from_str(contents)?,
            InputFormat::Yaml => serde_norway::from_str(contents)?,
        })
    }
}

fn read<T: DeserializeOwned>(path: &Path) -> Result<T, LoaderError> {
    let contents = fs::read_to_string(path)?;

    InputFormat::from_path(path).parse(&contents)
}

/// Load orders from a file.
///
/// # Errors
///
/// Returns a [`LoaderError`] if the file cannot be read or parsed.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_orders(path: impl AsRef<Path>) -> Result<Vec<Order>, LoaderError> {
    let records: Vec<orders::OrderRecord> = read(path.as_ref())?;
    let orders: Vec<Order> = records.into_iter().map(Order::from).collect();

    info!(count = orders.len(), "loaded orders");

    Ok(orders)
}

/// Load payment methods from a file.
///
/// # Errors
///
/// Returns a [`LoaderError`] if the file cannot be read or parsed, a discount is
/// out of range, or an identifier is repeated.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_payment_methods(path: impl AsRef<Path>) -> Result<PaymentMethods, LoaderError> {
    let records: Vec<payment_methods::PaymentMethodRecord> = read(path.as_ref())?;

    let methods = records
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<_>, _>>()?;

    let methods = PaymentMethods::new(methods)?;

    info!(count = methods.len(), "loaded payment methods");

    Ok(methods)
}
