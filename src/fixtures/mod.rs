//! Fixtures
//!
//! Orders described in YAML, loaded from `<base path>/orders/<name>.yml`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{fixtures::orders::OrderFixture, order::Order};

pub mod orders;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Order creation error
    #[error("Failed to create order: {0}")]
    Order(#[from] crate::order::OrderError),
}

/// Fixture
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,
}

impl Fixture {
    /// Create a fixture loader with the default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a fixture loader with a custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Load a named order fixture
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or the order is invalid.
    pub fn order(&self, name: &str) -> Result<Order<'static>, FixtureError> {
        load_order(self.base_path.join("orders").join(format!("{name}.yml")))
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Load an order from a YAML file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or the order is invalid.
pub fn load_order(path: impl AsRef<Path>) -> Result<Order<'static>, FixtureError> {
    let contents = fs::read_to_string(path)?;
    let fixture: OrderFixture = serde_norway::from_str(&contents)?;

    Order::try_from(fixture)
}
