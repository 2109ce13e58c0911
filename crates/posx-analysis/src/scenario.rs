use posx_portfolio::{Direction, DomainError, Fill};
use serde::Serialize;

use crate::{
    analyze, cumulative_table, suggest_capital_adjustments, target_prices, Analysis,
    CapitalAdjustment, CumulativeTable, TargetPrices,
};

/// Every input of a report run, injected by the caller.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scenario {
    pub fills: Vec<Fill>,
    pub take_profit: f64,
    pub stop_loss: f64,
    pub initial_capital: f64,
    /// Direction for the table, target prices and advisor.
    pub direction: Direction,
    pub target_return_pct: f64,
    /// Mark the advisor resolves positions at.
    pub desired_price: f64,
    pub hedge_entry_price: f64,
    pub spot_entry_price: f64,
}

/// The four sections, computed in report order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub analysis: Analysis,
    pub table: CumulativeTable,
    pub targets: TargetPrices,
    pub adjustment: CapitalAdjustment,
}

impl Scenario {
    pub fn analysis(&self) -> Result<Analysis, DomainError> {
        analyze(
            &self.fills,
            self.take_profit,
            self.stop_loss,
            self.initial_capital,
        )
    }

    pub fn table(&self) -> Result<CumulativeTable, DomainError> {
        cumulative_table(
            &self.fills,
            self.take_profit,
            self.stop_loss,
            self.initial_capital,
            self.direction,
        )
    }

    pub fn targets(&self) -> Result<TargetPrices, DomainError> {
        target_prices(
            &self.fills,
            self.initial_capital,
            self.target_return_pct,
            self.direction,
        )
    }

    pub fn adjustment(&self) -> Result<CapitalAdjustment, DomainError> {
        suggest_capital_adjustments(
            &self.fills,
            self.initial_capital,
            self.desired_price,
            self.target_return_pct,
            self.hedge_entry_price,
            self.spot_entry_price,
            self.direction,
        )
    }
}

/// Run all four sections. Stops at the first DomainError.
pub fn run_scenario(scenario: &Scenario) -> Result<ScenarioReport, DomainError> {
    Ok(ScenarioReport {
        analysis: scenario.analysis()?,
        table: scenario.table()?,
        targets: scenario.targets()?,
        adjustment: scenario.adjustment()?,
    })
}
