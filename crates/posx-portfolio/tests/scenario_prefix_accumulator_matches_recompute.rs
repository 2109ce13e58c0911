//! Incremental accumulator vs. recomputing every prefix from scratch.
//!
//! Both sum in fill order, so results must be bit-identical.

use posx_portfolio::{average_position, net_notional, Fill, PositionAccumulator};

#[test]
fn scenario_prefix_positions_are_identical() {
    let fills = [
        Fill::new(102_313.00, 300_000.00),
        Fill::new(83_888.00, 300_000.00),
        Fill::new(78_888.80, 1_000_000.00),
        Fill::new(91_250.25, 125_000.00),
        Fill::new(88_001.10, 42_000.00),
    ];

    let mut acc = PositionAccumulator::new();
    for k in 1..=fills.len() {
        acc.push(&fills[k - 1]).unwrap();

        let inc = acc.position().unwrap();
        let full = average_position(&fills[..k]).unwrap();

        assert_eq!(inc, full, "prefix {k}");
        assert_eq!(acc.notional(), net_notional(&fills[..k]), "prefix {k}");
    }
}

#[test]
fn scenario_empty_accumulator_has_no_position() {
    let acc = PositionAccumulator::new();
    assert!(acc.is_empty());
    assert!(acc.position().is_err());
}
