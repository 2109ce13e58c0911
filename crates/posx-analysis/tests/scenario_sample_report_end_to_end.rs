//! The original sample run: three buys, tp 100k, sl 90k, 2M principal,
//! long, 10% target, hedge @ 95k, add-on @ 82k, resolved at tp.
//!
//! Reference values computed independently from the closed-form formulas.

use posx_analysis::{run_scenario, CapitalBase, Channel, Scenario};
use posx_portfolio::{average_position, Direction, Fill};

fn sample() -> Scenario {
    Scenario {
        fills: vec![
            Fill::new(102_313.00, 300_000.00),
            Fill::new(83_888.00, 300_000.00),
            Fill::new(78_888.80, 1_000_000.00),
        ],
        take_profit: 100_000.0,
        stop_loss: 90_000.0,
        initial_capital: 2_000_000.0,
        direction: Direction::Long,
        target_return_pct: 0.10,
        desired_price: 100_000.0,
        hedge_entry_price: 95_000.0,
        spot_entry_price: 82_000.0,
    }
}

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

#[test]
fn scenario_analysis_section() {
    let r = run_scenario(&sample()).expect("sample is well-formed");
    let a = &r.analysis;

    assert_eq!(a.net_notional, 1_600_000.0);
    assert!(close(a.average_price, 83_400.896_046, 1e-5));
    assert!(close(a.quantity, 19.184_446_161, 1e-8));

    assert!(close(a.long.tp_pnl, 318_444.616_131, 1e-4));
    assert!(close(a.long.sl_pnl, 126_600.154_518, 1e-4));
    assert!(close(a.long.tp_after, 2_318_444.616_131, 1e-4));
    assert!(close(a.long.sl_after, 2_126_600.154_518, 1e-4));

    assert_eq!(a.short.tp_pnl, -a.long.tp_pnl);
    assert_eq!(a.short.sl_pnl, -a.long.sl_pnl);
    assert_eq!(a.long.avg_price, a.average_price);
    assert_eq!(a.short.qty, a.quantity);
}

#[test]
fn scenario_table_section() {
    let r = run_scenario(&sample()).unwrap();
    let rows = &r.table.rows;
    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0].average_price, 102_313.0);
    assert!(close(rows[0].tp_pnl, -6_782.129_348, 1e-4));
    assert!(close(rows[1].average_price, 92_188.902_787, 1e-4));
    assert!(close(rows[1].tp_pnl, 50_837.554_039, 1e-4));
    assert_eq!(rows[1].cumulative_notional, 600_000.0);
}

#[test]
fn scenario_targets_section() {
    let r = run_scenario(&sample()).unwrap();
    let np = r.targets.pair(CapitalBase::NetPosition).unwrap();
    let pr = r.targets.pair(CapitalBase::Principal).unwrap();

    assert_eq!(np.base_amount, 1_600_000.0);
    assert!(close(np.take_profit_price, 91_740.985_650, 1e-4));
    assert!(close(np.stop_loss_price, 75_060.806_441, 1e-4));
    assert!(close(pr.take_profit_price, 93_826.008_051, 1e-4));
    assert!(close(pr.stop_loss_price, 72_975.784_040, 1e-4));
}

#[test]
fn scenario_adjustment_section() {
    let r = run_scenario(&sample()).unwrap();
    let adj = &r.adjustment;

    assert!(close(adj.current_pnl, 318_444.616_131, 1e-4));
    assert!(close(adj.target_pnl, 200_000.0, 1e-6));
    assert!(close(adj.gap, -118_444.616_131, 1e-4));

    let hedge = adj.hedge.plan().expect("95k != 100k");
    assert_eq!(hedge.direction, Direction::Short);
    assert!(close(hedge.quantity, 23.688_923_226, 1e-8));
    assert!(close(hedge.notional, 2_250_447.706_501, 1e-4));

    let add = adj.add_on.plan().expect("82k != 100k");
    assert_eq!(add.direction, Direction::Long);
    assert!(close(add.quantity, -6.580_256_451, 1e-8));
    assert!(close(add.notional, -539_581.029_044, 1e-4));
    assert!(close(add.new_average_price.unwrap(), 84_132.260_414, 1e-4));
}

#[test]
fn scenario_hedge_at_desired_price_is_not_adjustable() {
    let mut s = sample();
    s.hedge_entry_price = s.desired_price;
    let r = run_scenario(&s).unwrap();

    assert!(matches!(r.adjustment.hedge, Channel::NotAdjustable { .. }));
    assert!(r.adjustment.add_on.is_adjustable());
}

#[test]
fn scenario_final_table_row_matches_full_position() {
    let s = sample();
    let r = run_scenario(&s).unwrap();
    let full = average_position(&s.fills).unwrap();
    let last = r.table.last().unwrap();

    assert_eq!(last.average_price, full.average_price);
    assert_eq!(last.quantity, full.quantity);
    assert_eq!(last.cumulative_notional, r.analysis.net_notional);
    assert_eq!(last.tp_pnl, r.analysis.long.tp_pnl);
}

#[test]
fn scenario_empty_fills_fail_every_section() {
    let mut s = sample();
    s.fills.clear();
    assert!(run_scenario(&s).is_err());
    assert!(s.analysis().is_err());
    assert!(s.table().is_err());
    assert!(s.targets().is_err());
    assert!(s.adjustment().is_err());
}
