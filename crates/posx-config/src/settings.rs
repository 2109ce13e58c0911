use anyhow::{Context, Result};
use posx_analysis::Scenario;
use posx_portfolio::{Direction, Fill};
use posx_report::{Lang, DEFAULT_INSTRUMENT};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Typed analysis configuration.
///
/// Required: `fills`, `take_profit`, `stop_loss`, `initial_capital`,
/// `hedge_entry_price`, `spot_entry_price`. Everything else has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_instrument")]
    pub instrument: String,
    pub fills: Vec<Fill>,
    pub take_profit: f64,
    pub stop_loss: f64,
    pub initial_capital: f64,
    #[serde(default = "default_direction")]
    pub direction: Direction,
    #[serde(default = "default_target_return_pct")]
    pub target_return_pct: f64,
    /// Defaults to `take_profit`.
    #[serde(default)]
    pub desired_price: Option<f64>,
    pub hedge_entry_price: f64,
    pub spot_entry_price: f64,
    #[serde(default)]
    pub report: ReportSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSettings {
    #[serde(default)]
    pub language: Lang,
}

fn default_instrument() -> String {
    DEFAULT_INSTRUMENT.to_string()
}

fn default_direction() -> Direction {
    Direction::Long
}

fn default_target_return_pct() -> f64 {
    0.10
}

impl AnalysisConfig {
    pub fn from_json(config_json: &Value) -> Result<Self> {
        serde_json::from_value(config_json.clone()).context("invalid analysis config")
    }

    /// Three buys averaging down from 102,313 to 78,888.80, 2M principal,
    /// 10% target, hedge at 95,000 and add-on at 82,000.
    pub fn sample() -> Self {
        Self {
            instrument: default_instrument(),
            fills: vec![
                Fill::new(102_313.00, 300_000.00),
                Fill::new(83_888.00, 300_000.00),
                Fill::new(78_888.80, 1_000_000.00),
            ],
            take_profit: 100_000.0,
            stop_loss: 90_000.0,
            initial_capital: 2_000_000.0,
            direction: Direction::Long,
            target_return_pct: default_target_return_pct(),
            desired_price: None,
            hedge_entry_price: 95_000.0,
            spot_entry_price: 82_000.0,
            report: ReportSettings::default(),
        }
    }

    pub fn desired_price(&self) -> f64 {
        self.desired_price.unwrap_or(self.take_profit)
    }

    pub fn to_scenario(&self) -> Scenario {
        Scenario {
            fills: self.fills.clone(),
            take_profit: self.take_profit,
            stop_loss: self.stop_loss,
            initial_capital: self.initial_capital,
            direction: self.direction,
            target_return_pct: self.target_return_pct,
            desired_price: self.desired_price(),
            hedge_entry_price: self.hedge_entry_price,
            spot_entry_price: self.spot_entry_price,
        }
    }
}
