use crate::error::DomainError;
use crate::types::{Fill, Position};

/// Running sums over a prefix of fills.
///
/// Carries Σ amount and Σ amount/price so each additional fill is O(1).
/// Sums are accumulated in fill order, which is exactly what
/// [`average_position`] does, so the position after `k` pushes is identical
/// to averaging the first `k` fills from scratch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionAccumulator {
    notional: f64,
    quantity: f64,
    count: usize,
}

impl PositionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one fill into the running sums.
    ///
    /// Rejects prices that cannot produce a quantity; the accumulator is left
    /// untouched in that case.
    pub fn push(&mut self, fill: &Fill) -> Result<(), DomainError> {
        if !fill.price.is_finite() || fill.price <= 0.0 {
            return Err(DomainError::NonPositivePrice {
                index: self.count,
                price: fill.price,
            });
        }
        self.notional += fill.amount;
        self.quantity += fill.quantity();
        self.count += 1;
        Ok(())
    }

    /// Σ amount over the fills pushed so far.
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Σ amount/price over the fills pushed so far.
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Current average price + quantity.
    pub fn position(&self) -> Result<Position, DomainError> {
        if self.count == 0 {
            return Err(DomainError::NoFills);
        }
        if self.quantity == 0.0 {
            return Err(DomainError::ZeroQuantity);
        }
        Ok(Position {
            average_price: self.notional / self.quantity,
            quantity: self.quantity,
        })
    }
}

/// Amount-weighted average entry price and total quantity.
///
/// average_price = Σ amount / Σ(amount/price)
/// quantity      = Σ(amount/price)
pub fn average_position(fills: &[Fill]) -> Result<Position, DomainError> {
    let mut acc = PositionAccumulator::new();
    for f in fills {
        acc.push(f)?;
    }
    acc.position()
}

/// Net position notional: Σ amount, not adjusted for direction.
pub fn net_notional(fills: &[Fill]) -> f64 {
    fills.iter().map(|f| f.amount).sum()
}
