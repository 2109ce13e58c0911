//! posx-portfolio
//!
//! Position math for a ladder of fills on a single instrument.
//! - Amount-weighted average entry price + quantity
//! - Directional PnL at a hypothetical exit price
//! - Inverse PnL (target price for a desired return)
//! - Blended average after an add-on
//! - Pure deterministic logic (no IO, no time, no logging)

mod averaging;
mod error;
mod pnl;
mod types;

pub use averaging::{average_position, net_notional, PositionAccumulator};
pub use error::DomainError;
pub use pnl::{blended_average, calc_pnl, solve_target_price, unit_pnl};
pub use types::{Direction, Fill, Position};

/// Below this absolute per-unit PnL a channel is treated as non-adjustable.
pub const UNIT_PNL_EPSILON: f64 = 1e-9;
