use posx_portfolio::{
    average_position, blended_average, calc_pnl, unit_pnl, Direction, DomainError, Fill,
    UNIT_PNL_EPSILON,
};
use serde::Serialize;

/// Sizing for one adjustment channel.
///
/// `quantity` and `notional` are signed: positive means open `direction`
/// at `entry_price`, negative means the opposite side.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChannelPlan {
    pub direction: Direction,
    pub entry_price: f64,
    pub unit_pnl: f64,
    pub quantity: f64,
    pub notional: f64,
    /// Add-on channel only. `None` when the add-on flattens the position.
    pub new_average_price: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Channel {
    Adjustable(ChannelPlan),
    /// Entry price equals the resolution price: one unit earns nothing.
    NotAdjustable { direction: Direction, entry_price: f64 },
}

impl Channel {
    pub fn plan(&self) -> Option<&ChannelPlan> {
        match self {
            Channel::Adjustable(p) => Some(p),
            Channel::NotAdjustable { .. } => None,
        }
    }

    pub fn is_adjustable(&self) -> bool {
        self.plan().is_some()
    }
}

/// Hedge and add-on recommendations to close the gap between the current
/// PnL at `desired_price` and `principal * target_return_pct`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CapitalAdjustment {
    pub direction: Direction,
    pub desired_price: f64,
    pub average_price: f64,
    pub quantity: f64,
    pub principal: f64,
    pub target_return_pct: f64,
    pub current_pnl: f64,
    pub target_pnl: f64,
    /// target_pnl - current_pnl
    pub gap: f64,
    /// Opposite-direction position.
    pub hedge: Channel,
    /// Same-direction position; also shifts the blended average.
    pub add_on: Channel,
}

pub fn suggest_capital_adjustments(
    fills: &[Fill],
    principal: f64,
    desired_price: f64,
    target_return_pct: f64,
    hedge_entry_price: f64,
    spot_entry_price: f64,
    direction: Direction,
) -> Result<CapitalAdjustment, DomainError> {
    let pos = average_position(fills)?;

    let current_pnl = calc_pnl(pos.average_price, pos.quantity, desired_price, direction);
    let target_pnl = principal * target_return_pct;
    let gap = target_pnl - current_pnl;

    let size = |entry_price: f64, channel_direction: Direction| {
        let per_unit = unit_pnl(entry_price, desired_price, channel_direction);
        if per_unit.abs() < UNIT_PNL_EPSILON {
            return None;
        }
        let quantity = gap / per_unit;
        Some(ChannelPlan {
            direction: channel_direction,
            entry_price,
            unit_pnl: per_unit,
            quantity,
            notional: quantity * entry_price,
            new_average_price: None,
        })
    };

    let hedge_direction = direction.opposite();
    let hedge = match size(hedge_entry_price, hedge_direction) {
        Some(plan) => Channel::Adjustable(plan),
        None => Channel::NotAdjustable {
            direction: hedge_direction,
            entry_price: hedge_entry_price,
        },
    };

    let add_on = match size(spot_entry_price, direction) {
        Some(mut plan) => {
            // ZeroBlendedQuantity is reported as an undefined average, not raised.
            plan.new_average_price =
                blended_average(pos.average_price, pos.quantity, plan.quantity, spot_entry_price)
                    .ok();
            Channel::Adjustable(plan)
        }
        None => Channel::NotAdjustable {
            direction,
            entry_price: spot_entry_price,
        },
    };

    Ok(CapitalAdjustment {
        direction,
        desired_price,
        average_price: pos.average_price,
        quantity: pos.quantity,
        principal,
        target_return_pct,
        current_pnl,
        target_pnl,
        gap,
        hedge,
        add_on,
    })
}
