//! Command line interface

use std::{io, path::PathBuf};

use clap::Parser;
use thiserror::Error;
use tracing::info;

use crate::{
    config::{ConfigError, PromotionRules},
    discounts::DiscountError,
    engine::DiscountEngine,
    fixtures::{FixtureError, load_order},
    observability::LoggingConfig,
    receipt::ReceiptError,
};

/// Errors raised while running the command line tool
#[derive(Debug, Error)]
pub enum CliError {
    /// The rules file could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The order file could not be loaded
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// The order could not be discounted
    #[error(transparent)]
    Discount(#[from] DiscountError),

    /// The receipt could not be written
    #[error(transparent)]
    Receipt(#[from] ReceiptError),
}

/// Apply promotions to a food order and print the receipt
#[derive(Debug, Parser)]
#[command(name = "menu-promos", about = "Apply promotions to a food order", long_about = None)]
pub struct CliArgs {
    /// Path to an order YAML file
    #[arg(short, long)]
    pub order: PathBuf,

    /// Promo code, replacing any code in the order file
    #[arg(short, long, env = "PROMO_CODE")]
    pub code: Option<String>,

    /// Path to a promotion rules YAML file
    #[arg(short, long, env = "PROMO_RULES")]
    pub rules: Option<PathBuf>,

    /// Logging settings
    #[command(flatten)]
    pub logging: LoggingConfig,
}

/// Load the order and rules, discount the order, and write the receipt.
///
/// # Errors
///
/// Returns an error if a file cannot be loaded, the order cannot be discounted, or the
/// receipt cannot be written.
pub fn run(args: &CliArgs, out: impl io::Write) -> Result<(), CliError> {
    let rules = if let Some(path) = &args.rules {
        PromotionRules::load(path)?
    } else {
        PromotionRules::default()
    };

    let mut order = load_order(&args.order)?;

    if let Some(code) = &args.code {
        order = order.with_promo_code(code.clone());
    }

    info!(order = %args.order.display(), items = order.len(), "order loaded");

    let result = DiscountEngine::new(rules).compute(&order)?;

    result.write_to(out)?;

    Ok(())
}
