//! posx-analysis
//!
//! Structured analytics over a fill ladder. Every function here returns
//! plain data (serde-serializable) and never prints; rendering lives in
//! `posx-report`.
//!
//! Sections, in report order:
//! 1. [`analyze`]: PnL at take-profit / stop-loss for both directions
//! 2. [`cumulative_table`]: per-fill running ledger for one direction
//! 3. [`target_prices`]: exit prices for a desired return, two capital bases
//! 4. [`suggest_capital_adjustments`]: hedge / add-on sizing to hit a return

mod adjust;
mod analyze;
mod scenario;
mod table;
mod targets;

pub use adjust::{suggest_capital_adjustments, CapitalAdjustment, Channel, ChannelPlan};
pub use analyze::{analyze, Analysis, Outcome};
pub use scenario::{run_scenario, Scenario, ScenarioReport};
pub use table::{cumulative_table, CumulativeRow, CumulativeTable};
pub use targets::{target_prices, CapitalBase, TargetPricePair, TargetPrices};
