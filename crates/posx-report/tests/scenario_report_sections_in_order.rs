//! Full report: every section present, in report order, in both languages.

use posx_analysis::{run_scenario, Scenario};
use posx_portfolio::{Direction, Fill};
use posx_report::{ConsoleRenderer, Lang, MarkdownRenderer, Renderer};

fn sample(direction: Direction) -> Scenario {
    Scenario {
        fills: vec![
            Fill::new(102_313.00, 300_000.00),
            Fill::new(83_888.00, 300_000.00),
            Fill::new(78_888.80, 1_000_000.00),
        ],
        take_profit: 100_000.0,
        stop_loss: 90_000.0,
        initial_capital: 2_000_000.0,
        direction,
        target_return_pct: 0.10,
        desired_price: 100_000.0,
        hedge_entry_price: 95_000.0,
        spot_entry_price: 82_000.0,
    }
}

fn positions(haystack: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|n| haystack.find(n).unwrap_or_else(|| panic!("missing section: {n}")))
        .collect()
}

fn assert_ordered(p: &[usize]) {
    assert!(p.windows(2).all(|w| w[0] < w[1]), "sections out of order: {p:?}");
}

#[test]
fn scenario_console_report_en() {
    let r = run_scenario(&sample(Direction::Long)).unwrap();
    let out = ConsoleRenderer::new(Lang::En).report(&r);

    let p = positions(
        &out,
        &[
            "Position Summary",
            "Per-fill position ledger (LONG)",
            "Target return settings",
            "Principal return adjustment",
        ],
    );
    assert_ordered(&p);
    assert!(out.contains("1,600,000.00"));
}

#[test]
fn scenario_console_report_zh() {
    let r = run_scenario(&sample(Direction::Long)).unwrap();
    let out = ConsoleRenderer::new(Lang::Zh).report(&r);

    let p = positions(
        &out,
        &["开仓明细", "逐笔建仓明细表（LONG）", "目标收益百分比设置", "本金收益调节建议"],
    );
    assert_ordered(&p);
    assert!(out.contains("那将会 赚取 318,444.62"));
    assert!(out.contains("若是目标止盈价格为 100000，"));
}

#[test]
fn scenario_markdown_report_short() {
    let r = run_scenario(&sample(Direction::Short)).unwrap();
    let out = MarkdownRenderer::new(Lang::En).report(&r);

    let p = positions(
        &out,
        &[
            "## Position Analysis",
            "### Incremental Position Building",
            "## Target Price Analysis",
            "## Capital Adjustment Suggestions",
        ],
    );
    assert_ordered(&p);
    assert!(out.contains("**Position:** SHORT"));
    assert!(out.contains("**Action:** Open Long position"));
    assert!(out.contains("**Action:** Sell more BTC"));
}
