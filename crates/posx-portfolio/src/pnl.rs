use crate::error::DomainError;
use crate::types::Direction;

/// Signed PnL of `quantity` units entered at `average_price` and closed at
/// `target_price`.
///
/// long:  (target - avg) * qty
/// short: (avg - target) * qty
pub fn calc_pnl(average_price: f64, quantity: f64, target_price: f64, direction: Direction) -> f64 {
    match direction {
        Direction::Long => (target_price - average_price) * quantity,
        Direction::Short => (average_price - target_price) * quantity,
    }
}

/// PnL of exactly one unit entered at `entry_price` and resolved at `exit_price`.
pub fn unit_pnl(entry_price: f64, exit_price: f64, direction: Direction) -> f64 {
    calc_pnl(entry_price, 1.0, exit_price, direction)
}

/// Inverse of [`calc_pnl`]: the exit price at which the position earns
/// `capital_base * return_pct`.
///
/// long:  avg + target_pnl / qty
/// short: avg - target_pnl / qty
///
/// A negative `return_pct` solves for a loss (stop-loss side).
pub fn solve_target_price(
    average_price: f64,
    quantity: f64,
    capital_base: f64,
    return_pct: f64,
    direction: Direction,
) -> Result<f64, DomainError> {
    if quantity == 0.0 {
        return Err(DomainError::ZeroQuantity);
    }
    let target_pnl = capital_base * return_pct;
    Ok(match direction {
        Direction::Long => average_price + target_pnl / quantity,
        Direction::Short => average_price - target_pnl / quantity,
    })
}

/// Average price after adding `add_quantity` units at `add_price`.
///
/// `add_quantity` is signed: a negative add-on reduces the position.
pub fn blended_average(
    average_price: f64,
    quantity: f64,
    add_quantity: f64,
    add_price: f64,
) -> Result<f64, DomainError> {
    let new_quantity = quantity + add_quantity;
    if new_quantity == 0.0 {
        return Err(DomainError::ZeroBlendedQuantity);
    }
    Ok((quantity * average_price + add_quantity * add_price) / new_quantity)
}
