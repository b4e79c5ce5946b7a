use crate::error::ConfigError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// The root configuration structure for the report runner.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub high_value: HighValueParams,
    #[serde(default)]
    pub top_regions: TopRegionsParams,
    #[serde(default)]
    pub premium: PremiumParams,
    #[serde(default)]
    pub city_date: CityDateParams,
}

/// Parameters for the high-value-orders-in-a-region report.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HighValueParams {
    /// The region whose high-value orders are listed.
    pub region: String,
    /// Orders are high-value when total_price strictly exceeds this.
    pub threshold: Decimal,
}

/// Parameters for the top-N-regions-by-order-volume report.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TopRegionsParams {
    /// Only orders with total_price strictly above this count toward volume.
    pub threshold: Decimal,
    /// How many ranked regions to keep.
    pub limit: usize,
}

/// Parameters for the premium-orders-in-a-region report.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PremiumParams {
    pub region: String,
    pub threshold: Decimal,
}

/// Parameters for the orders-by-city-and-date report.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CityDateParams {
    pub city: String,
    /// Exact-match target date in "MM/DD/YYYY" form.
    pub date: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            high_value: HighValueParams::default(),
            top_regions: TopRegionsParams::default(),
            premium: PremiumParams::default(),
            city_date: CityDateParams::default(),
        }
    }
}

impl Default for HighValueParams {
    fn default() -> Self {
        Self {
            region: "California".to_string(),
            threshold: dec!(1000),
        }
    }
}

impl Default for TopRegionsParams {
    fn default() -> Self {
        Self {
            threshold: dec!(500),
            limit: 10,
        }
    }
}

impl Default for PremiumParams {
    fn default() -> Self {
        Self {
            region: "Texas".to_string(),
            threshold: dec!(2000),
        }
    }
}

impl Default for CityDateParams {
    fn default() -> Self {
        Self {
            city: "New York City".to_string(),
            date: "10/21/2021".to_string(),
        }
    }
}

impl Config {
    /// Checks the merged configuration before any report runs.
    ///
    /// The target date is parsed once here to catch typos at startup; the
    /// reports themselves still compare it as an exact string.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, threshold) in [
            ("high_value.threshold", self.high_value.threshold),
            ("top_regions.threshold", self.top_regions.threshold),
            ("premium.threshold", self.premium.threshold),
        ] {
            if threshold < Decimal::ZERO {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must not be negative, got {threshold}"
                )));
            }
        }

        if self.top_regions.limit == 0 {
            return Err(ConfigError::ValidationError(
                "top_regions.limit must be at least 1".to_string(),
            ));
        }

        for (name, value) in [
            ("high_value.region", &self.high_value.region),
            ("premium.region", &self.premium.region),
            ("city_date.city", &self.city_date.city),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must not be empty"
                )));
            }
        }

        if NaiveDate::parse_from_str(&self.city_date.date, "%m/%d/%Y").is_err() {
            return Err(ConfigError::ValidationError(format!(
                "city_date.date must be in MM/DD/YYYY form, got '{}'",
                self.city_date.date
            )));
        }

        Ok(())
    }
}
