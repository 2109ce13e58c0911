use posx_portfolio::{average_position, calc_pnl, net_notional, Direction, DomainError, Fill};
use serde::Serialize;

/// PnL and post-PnL capital at both exits for one direction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Outcome {
    pub tp_pnl: f64,
    pub tp_after: f64,
    pub sl_pnl: f64,
    pub sl_after: f64,
    pub avg_price: f64,
    pub qty: f64,
}

/// Full two-direction analysis over all fills.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Analysis {
    pub average_price: f64,
    pub quantity: f64,
    pub net_notional: f64,
    pub initial_capital: f64,
    pub take_profit: f64,
    pub stop_loss: f64,
    pub long: Outcome,
    pub short: Outcome,
}

impl Analysis {
    pub fn outcome(&self, direction: Direction) -> &Outcome {
        match direction {
            Direction::Long => &self.long,
            Direction::Short => &self.short,
        }
    }
}

/// Evaluate the averaged position at `take_profit` and `stop_loss`, as a
/// long and as a short. `*_after` is `initial_capital + pnl`.
pub fn analyze(
    fills: &[Fill],
    take_profit: f64,
    stop_loss: f64,
    initial_capital: f64,
) -> Result<Analysis, DomainError> {
    let pos = average_position(fills)?;

    let outcome = |direction: Direction| {
        let tp_pnl = calc_pnl(pos.average_price, pos.quantity, take_profit, direction);
        let sl_pnl = calc_pnl(pos.average_price, pos.quantity, stop_loss, direction);
        Outcome {
            tp_pnl,
            tp_after: initial_capital + tp_pnl,
            sl_pnl,
            sl_after: initial_capital + sl_pnl,
            avg_price: pos.average_price,
            qty: pos.quantity,
        }
    };

    Ok(Analysis {
        average_price: pos.average_price,
        quantity: pos.quantity,
        net_notional: net_notional(fills),
        initial_capital,
        take_profit,
        stop_loss,
        long: outcome(Direction::Long),
        short: outcome(Direction::Short),
    })
}
