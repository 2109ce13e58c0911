//! Target-price solver is the inverse of calc_pnl.
//!
//! GREEN when calc_pnl(avg, qty, solve(avg, qty, base, r, dir), dir) ≈ base * r
//! for both directions, both signs of r, and both capital bases.

use posx_portfolio::{
    average_position, calc_pnl, net_notional, solve_target_price, Direction, DomainError, Fill,
};

#[test]
fn scenario_solver_round_trips_for_both_directions_and_bases() {
    let fills = [
        Fill::new(102_313.00, 300_000.00),
        Fill::new(83_888.00, 300_000.00),
        Fill::new(78_888.80, 1_000_000.00),
    ];
    let pos = average_position(&fills).unwrap();
    let bases = [net_notional(&fills), 2_000_000.0];

    for dir in Direction::ALL {
        for base in bases {
            for r in [0.10, -0.10, 0.025, -0.5] {
                let px = solve_target_price(pos.average_price, pos.quantity, base, r, dir).unwrap();
                let pnl = calc_pnl(pos.average_price, pos.quantity, px, dir);
                let want = base * r;
                assert!(
                    (pnl - want).abs() <= 1e-6 * want.abs().max(1.0),
                    "dir={dir} base={base} r={r}: got {pnl}, want {want}"
                );
            }
        }
    }
}

#[test]
fn scenario_sample_target_prices_match_reference() {
    let fills = [
        Fill::new(102_313.00, 300_000.00),
        Fill::new(83_888.00, 300_000.00),
        Fill::new(78_888.80, 1_000_000.00),
    ];
    let pos = average_position(&fills).unwrap();

    let tp = solve_target_price(pos.average_price, pos.quantity, 2_000_000.0, 0.10, Direction::Long)
        .unwrap();
    let sl = solve_target_price(pos.average_price, pos.quantity, 2_000_000.0, -0.10, Direction::Long)
        .unwrap();
    assert!((tp - 93_826.008).abs() < 1e-2);
    assert!((sl - 72_975.784).abs() < 1e-2);
}

#[test]
fn scenario_solver_zero_quantity_is_domain_error() {
    let err = solve_target_price(80_000.0, 0.0, 1_000_000.0, 0.1, Direction::Short).unwrap_err();
    assert_eq!(err, DomainError::ZeroQuantity);
    assert_eq!(err.to_string(), "domain error: total quantity is zero");
}
