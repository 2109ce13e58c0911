use posx_portfolio::{calc_pnl, Direction, DomainError, Fill, PositionAccumulator};
use serde::Serialize;

/// One row of the per-fill ledger: state of the position after fill `index`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CumulativeRow {
    /// 1-based fill number.
    pub index: usize,
    /// This fill's price.
    pub price: f64,
    /// This fill's notional.
    pub amount: f64,
    /// Σ amount over fills 1..=index.
    pub cumulative_notional: f64,
    /// Average price over fills 1..=index.
    pub average_price: f64,
    pub quantity: f64,
    pub tp_pnl: f64,
    pub tp_after: f64,
    pub sl_pnl: f64,
    pub sl_after: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CumulativeTable {
    pub direction: Direction,
    pub take_profit: f64,
    pub stop_loss: f64,
    pub rows: Vec<CumulativeRow>,
}

impl CumulativeTable {
    /// Row after the last fill; equals the full-set position.
    pub fn last(&self) -> Option<&CumulativeRow> {
        self.rows.last()
    }
}

/// Build the running ledger for `direction`, one row per fill in order.
///
/// Each prefix is averaged with [`PositionAccumulator`], which sums in the
/// same order as a from-scratch average of that prefix.
pub fn cumulative_table(
    fills: &[Fill],
    take_profit: f64,
    stop_loss: f64,
    initial_capital: f64,
    direction: Direction,
) -> Result<CumulativeTable, DomainError> {
    if fills.is_empty() {
        return Err(DomainError::NoFills);
    }

    let mut acc = PositionAccumulator::new();
    let mut rows = Vec::with_capacity(fills.len());

    for (i, fill) in fills.iter().enumerate() {
        acc.push(fill)?;
        let pos = acc.position()?;

        let tp_pnl = calc_pnl(pos.average_price, pos.quantity, take_profit, direction);
        let sl_pnl = calc_pnl(pos.average_price, pos.quantity, stop_loss, direction);

        rows.push(CumulativeRow {
            index: i + 1,
            price: fill.price,
            amount: fill.amount,
            cumulative_notional: acc.notional(),
            average_price: pos.average_price,
            quantity: pos.quantity,
            tp_pnl,
            tp_after: initial_capital + tp_pnl,
            sl_pnl,
            sl_after: initial_capital + sl_pnl,
        });
    }

    Ok(CumulativeTable {
        direction,
        take_profit,
        stop_loss,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_row_is_first_fill_alone() {
        let fills = [Fill::new(200.0, 1_000.0), Fill::new(100.0, 1_000.0)];
        let t = cumulative_table(&fills, 250.0, 150.0, 0.0, Direction::Long).unwrap();

        let r = &t.rows[0];
        assert_eq!(r.index, 1);
        assert_eq!(r.average_price, 200.0);
        assert_eq!(r.quantity, 5.0);
        assert_eq!(r.tp_pnl, 250.0);
        assert_eq!(r.sl_pnl, -250.0);
    }

    #[test]
    fn rows_follow_fill_order() {
        let fills = [Fill::new(200.0, 1_000.0), Fill::new(100.0, 3_000.0)];
        let t = cumulative_table(&fills, 250.0, 150.0, 0.0, Direction::Short).unwrap();

        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.rows[1].index, 2);
        assert_eq!(t.rows[1].price, 100.0);
        assert_eq!(t.rows[1].amount, 3_000.0);
        assert_eq!(t.rows[1].cumulative_notional, 4_000.0);
        assert_eq!(t.direction, Direction::Short);
    }

    #[test]
    fn empty_fills_is_domain_error() {
        assert_eq!(
            cumulative_table(&[], 1.0, 1.0, 0.0, Direction::Long),
            Err(DomainError::NoFills)
        );
    }
}
