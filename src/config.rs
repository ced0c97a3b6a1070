//! Promotion rules configuration
//!
//! Every field defaults to the house rules, so an empty rules file (or no file at all)
//! reproduces the standard behaviour:
//!
//! ```yaml
//! food:
//!   threshold: 3
//!   cap: 20
//! beverage:
//!   threshold: 2
//!   cap: 10
//! welcome_percentage: 0.30
//! stacking: stack
//! ```

use std::{fs, path::Path};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the rules file
    #[error("Failed to read rules file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A rule has a value outside its valid range
    #[error("Invalid rule: {0}")]
    Invalid(String),
}

/// How automatic group discounts combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stacking {
    /// Every qualifying group contributes, and contributions are summed
    #[default]
    Stack,

    /// Only the single largest group contribution applies
    Best,
}

/// "Buy `threshold`, one of them is discounted by up to `cap`"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuantityTier {
    /// Number of identical items needed for one discounted unit
    pub threshold: usize,

    /// Maximum discount per discounted unit, in major units of the order currency
    pub cap: Decimal,
}

impl QuantityTier {
    /// Create a new tier.
    pub fn new(threshold: usize, cap: Decimal) -> Self {
        Self { threshold, cap }
    }
}

/// Tunable promotion rules
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PromotionRules {
    /// Automatic tier for identical food items
    pub food: QuantityTier,

    /// Automatic tier for identical beverages
    pub beverage: QuantityTier,

    /// Fraction of the subtotal taken off by the welcome code
    pub welcome_percentage: Decimal,

    /// How automatic group discounts combine
    pub stacking: Stacking,
}

impl Default for PromotionRules {
    fn default() -> Self {
        Self {
            food: QuantityTier::new(3, Decimal::new(20, 0)),
            beverage: QuantityTier::new(2, Decimal::new(10, 0)),
            welcome_percentage: Decimal::new(30, 2),
            stacking: Stacking::Stack,
        }
    }
}

impl PromotionRules {
    /// Parse and validate rules from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or a rule is out of range.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let rules: Self = if contents.trim().is_empty() {
            Self::default()
        } else {
            serde_norway::from_str(contents)?
        };

        rules.validate()?;

        Ok(rules)
    }

    /// Load and validate rules from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or a rule is out of range.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml_str(&contents)
    }

    /// Check every rule is in range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first offending rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, tier) in [("food", &self.food), ("beverage", &self.beverage)] {
            if tier.threshold == 0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} threshold must be at least 1"
                )));
            }

            if tier.cap.is_sign_negative() {
                return Err(ConfigError::Invalid(format!(
                    "{name} cap must not be negative"
                )));
            }
        }

        if self.welcome_percentage < Decimal::ZERO || self.welcome_percentage > Decimal::ONE {
            return Err(ConfigError::Invalid(
                "welcome_percentage must be between 0 and 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_match_house_rules() {
        let rules = PromotionRules::default();

        assert_eq!(rules.food, QuantityTier::new(3, Decimal::new(20, 0)));
        assert_eq!(rules.beverage, QuantityTier::new(2, Decimal::new(10, 0)));
        assert_eq!(rules.welcome_percentage, Decimal::new(30, 2));
        assert_eq!(rules.stacking, Stacking::Stack);
    }

    #[test]
    fn empty_yaml_is_default() -> TestResult {
        assert_eq!(PromotionRules::from_yaml_str("")?, PromotionRules::default());

        Ok(())
    }

    #[test]
    fn partial_yaml_overrides_only_given_fields() -> TestResult {
        let rules = PromotionRules::from_yaml_str(
            "beverage:\n  threshold: 3\n  cap: 15\nstacking: best\n",
        )?;

        assert_eq!(rules.food, PromotionRules::default().food);
        assert_eq!(rules.beverage, QuantityTier::new(3, Decimal::new(15, 0)));
        assert_eq!(rules.stacking, Stacking::Best);

        Ok(())
    }

    #[test]
    fn zero_threshold_is_rejected() {
        let result = PromotionRules::from_yaml_str("food:\n  threshold: 0\n  cap: 20\n");

        assert!(matches!(result, Err(ConfigError::Invalid(msg)) if msg.contains("food")));
    }

    #[test]
    fn welcome_percentage_above_one_is_rejected() {
        let result = PromotionRules::from_yaml_str("welcome_percentage: 1.5\n");

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn unknown_field_is_a_yaml_error() {
        let result = PromotionRules::from_yaml_str("dessert: true\n");

        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn load_reads_rules_from_disk() -> TestResult {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "welcome_percentage: 0.5")?;

        let rules = PromotionRules::load(file.path())?;

        assert_eq!(rules.welcome_percentage, Decimal::new(5, 1));

        Ok(())
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = PromotionRules::load("/definitely/not/here/rules.yml");

        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
