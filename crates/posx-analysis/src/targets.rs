use posx_portfolio::{
    average_position, net_notional, solve_target_price, Direction, DomainError, Fill,
};
use serde::Serialize;

/// What the desired return is measured against.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CapitalBase {
    /// Σ amount over all fills.
    NetPosition,
    /// Initial capital.
    Principal,
}

/// Take-profit / stop-loss exit prices for one capital base.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TargetPricePair {
    pub base: CapitalBase,
    pub base_amount: f64,
    /// Exit price earning `+return_pct` of the base.
    pub take_profit_price: f64,
    /// Exit price losing `return_pct` of the base.
    pub stop_loss_price: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TargetPrices {
    pub direction: Direction,
    pub average_price: f64,
    pub quantity: f64,
    pub net_notional: f64,
    pub initial_capital: f64,
    pub return_pct: f64,
    /// Net-position base first, principal second.
    pub pairs: Vec<TargetPricePair>,
}

impl TargetPrices {
    pub fn pair(&self, base: CapitalBase) -> Option<&TargetPricePair> {
        self.pairs.iter().find(|p| p.base == base)
    }
}

/// Solve the four exit prices: {+r, -r} x {net position notional, principal}.
pub fn target_prices(
    fills: &[Fill],
    initial_capital: f64,
    return_pct: f64,
    direction: Direction,
) -> Result<TargetPrices, DomainError> {
    let pos = average_position(fills)?;
    let notional = net_notional(fills);

    let mut pairs = Vec::with_capacity(2);
    for (base, base_amount) in [
        (CapitalBase::NetPosition, notional),
        (CapitalBase::Principal, initial_capital),
    ] {
        let take_profit_price = solve_target_price(
            pos.average_price,
            pos.quantity,
            base_amount,
            return_pct,
            direction,
        )?;
        let stop_loss_price = solve_target_price(
            pos.average_price,
            pos.quantity,
            base_amount,
            -return_pct,
            direction,
        )?;
        pairs.push(TargetPricePair {
            base,
            base_amount,
            take_profit_price,
            stop_loss_price,
        });
    }

    Ok(TargetPrices {
        direction,
        average_price: pos.average_price,
        quantity: pos.quantity,
        net_notional: notional,
        initial_capital,
        return_pct,
        pairs,
    })
}
