//! Engine configuration.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use barmaster_inventory::Unit;

use crate::reconcile::DEFAULT_REPORT_LIMIT;
use crate::share::Palette;

pub const ENV_WINDOW_DAYS: &str = "BARMASTER_WINDOW_DAYS";
pub const ENV_REPORT_LIMIT: &str = "BARMASTER_REPORT_LIMIT";
pub const ENV_DEFAULT_UNIT: &str = "BARMASTER_DEFAULT_UNIT";
pub const ENV_SHARE_CATEGORY: &str = "BARMASTER_SHARE_CATEGORY";
pub const ENV_PALETTE: &str = "BARMASTER_PALETTE";

/// Longest accepted rolling window: one leap year of days.
pub const MAX_WINDOW_DAYS: usize = 366;

/// Knobs of the weekly reconciliation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogisticsConfig {
    /// Length of the rolling window, today included.
    pub window_days: usize,
    /// Rows kept in the logistics report.
    pub report_limit: usize,
    /// Unit shown for demand with no matching inventory record.
    pub default_unit: Unit,
    /// Inventory category drawn as a ring chart.
    pub share_category: String,
    pub palette: Palette,
}

impl Default for LogisticsConfig {
    fn default() -> Self {
        Self {
            window_days: 7,
            report_limit: DEFAULT_REPORT_LIMIT,
            default_unit: Unit::Unit,
            share_category: "Destilado".to_string(),
            palette: Palette::default(),
        }
    }
}

impl LogisticsConfig {
    /// Read overrides from `BARMASTER_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Invalid values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        match parse_var::<usize>(&lookup, ENV_WINDOW_DAYS) {
            Some(v) if v > MAX_WINDOW_DAYS => tracing::warn!(
                var = ENV_WINDOW_DAYS,
                value = v,
                max = MAX_WINDOW_DAYS,
                "window too long; keeping default"
            ),
            Some(v) => config.window_days = v,
            None => {}
        }
        if let Some(v) = parse_var::<usize>(&lookup, ENV_REPORT_LIMIT) {
            config.report_limit = v;
        }
        if let Some(v) = parse_var::<Unit>(&lookup, ENV_DEFAULT_UNIT) {
            config.default_unit = v;
        }
        if let Some(v) = lookup(ENV_SHARE_CATEGORY).filter(|v| !v.trim().is_empty()) {
            config.share_category = v.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_PALETTE) {
            let colors: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(String::from)
                .collect();
            match Palette::new(colors) {
                Ok(palette) => config.palette = palette,
                Err(e) => tracing::warn!(var = ENV_PALETTE, error = %e, "ignoring palette override"),
            }
        }

        config
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: core::fmt::Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(var = key, value = %raw, error = %e, "invalid configuration value; keeping default");
            None
        }
    }
}
