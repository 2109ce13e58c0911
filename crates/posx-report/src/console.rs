use posx_analysis::{
    Analysis, CapitalAdjustment, CapitalBase, Channel, CumulativeTable, TargetPrices,
};
use posx_portfolio::Direction;

use crate::format::{money, percent, plain, signed, signed_plain};
use crate::lang::{Labels, Lang};
use crate::{Renderer, DEFAULT_INSTRUMENT};

const SECTION_RULE: &str = "================================";
const TABLE_RULE_WIDTH: usize = 150;
const RULE_WIDTH: usize = 80;

/// Fixed-width console report, one block per section.
#[derive(Clone, Debug)]
pub struct ConsoleRenderer {
    lang: Lang,
    instrument: String,
}

impl ConsoleRenderer {
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            instrument: DEFAULT_INSTRUMENT.to_string(),
        }
    }

    pub fn with_instrument<S: Into<String>>(mut self, instrument: S) -> Self {
        self.instrument = instrument.into();
        self
    }

    fn l(&self) -> &'static Labels {
        self.lang.labels()
    }
}

fn upper(d: Direction) -> String {
    d.as_str().to_ascii_uppercase()
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

impl Renderer for ConsoleRenderer {
    fn analysis(&self, a: &Analysis) -> String {
        let l = self.l();
        let mut lines = vec![
            l.summary_title.to_string(),
            format!("{}: {}", l.average_price, plain(a.average_price, 2)),
            format!("{}: {}", l.total_quantity, plain(a.quantity, 6)),
            format!("{}: {}", l.total_principal, money(a.initial_capital)),
            SECTION_RULE.to_string(),
            String::new(),
        ];

        let verb = |pnl: f64| if pnl >= 0.0 { l.gain } else { l.lose };

        for d in Direction::ALL {
            let o = a.outcome(d);
            lines.push(format!("====== {}{} ======", upper(d), l.direction_results));

            lines.push(format!("{}{}{}", l.if_tp, a.take_profit, l.comma));
            lines.push(format!("{}{} {}", l.you_would, verb(o.tp_pnl), money(o.tp_pnl.abs())));
            lines.push(format!("{}{}", l.after_tp, money(o.tp_after)));
            lines.push(String::new());

            lines.push(format!("{}{}{}", l.if_sl, a.stop_loss, l.comma));
            lines.push(format!("{}{} {}", l.you_would, verb(o.sl_pnl), money(o.sl_pnl.abs())));
            lines.push(format!("{}{}", l.after_sl, money(o.sl_after)));
            lines.push(String::new());

            lines.push(SECTION_RULE.to_string());
            lines.push(String::new());
        }

        finish(lines)
    }

    fn table(&self, t: &CumulativeTable) -> String {
        let l = self.l();
        let rule = "-".repeat(TABLE_RULE_WIDTH);

        let mut lines = vec![
            format!("{}{}{}{}", l.table_title, l.lparen, upper(t.direction), l.rparen),
            rule.clone(),
            format!(
                "{:>2}  {:>10}  {:>12}  {:>12}  {:>10}  {:>12}  {:>14}  {:>12}  {:>14}",
                "#",
                l.col_price,
                l.col_amount,
                l.col_cumulative,
                l.col_avg,
                l.col_tp_pnl,
                l.col_tp_after,
                l.col_sl_pnl,
                l.col_sl_after,
            ),
            rule.clone(),
        ];

        for r in &t.rows {
            lines.push(format!(
                "{:>2}  {:>10}  {:>12}  {:>12}  {:>10}  {:>12}  {:>14}  {:>12}  {:>14}",
                r.index,
                money(r.price),
                money(r.amount),
                money(r.cumulative_notional),
                money(r.average_price),
                money(r.tp_pnl),
                money(r.tp_after),
                money(r.sl_pnl),
                money(r.sl_after),
            ));
        }
        lines.push(rule);

        finish(lines)
    }

    fn targets(&self, t: &TargetPrices) -> String {
        let l = self.l();
        let rule = "-".repeat(RULE_WIDTH);
        let pct = percent(t.return_pct);

        let mut lines = vec![
            l.targets_title.to_string(),
            rule.clone(),
            format!(
                "{}: {}  {}: {}  {}: {}  {}: {}",
                l.current_average,
                plain(t.average_price, 2),
                l.total_quantity,
                plain(t.quantity, 6),
                l.net_position_amount,
                money(t.net_notional),
                l.principal,
                money(t.initial_capital),
            ),
            format!(
                "{}: {}  {}: {}",
                l.direction,
                upper(t.direction),
                l.target_return,
                pct
            ),
            String::new(),
        ];

        for pair in &t.pairs {
            let label = match pair.base {
                CapitalBase::NetPosition => l.base_net_position,
                CapitalBase::Principal => l.base_principal,
            };
            lines.push(format!(
                "{}{}{}: {}{}:",
                label,
                l.lparen,
                l.base,
                money(pair.base_amount),
                l.rparen
            ));
            lines.push(format!(
                "  {} {}{}: {}",
                l.take_profit_word,
                pct,
                l.target_price_phrase,
                plain(pair.take_profit_price, 2)
            ));
            lines.push(format!(
                "  {} {}{}: {}",
                l.stop_loss_word,
                pct,
                l.target_price_phrase,
                plain(pair.stop_loss_price, 2)
            ));
            lines.push(String::new());
        }
        lines.push(rule);

        finish(lines)
    }

    fn adjustment(&self, a: &CapitalAdjustment) -> String {
        let l = self.l();
        let rule = "-".repeat(RULE_WIDTH);

        let mut lines = vec![
            l.adjust_title.to_string(),
            rule.clone(),
            format!(
                "{}: {}  {}: {}",
                l.direction,
                upper(a.direction),
                l.desired_price,
                money(a.desired_price)
            ),
            format!(
                "{}: {}  {}: {}  {}: {}",
                l.current_pnl,
                money(a.current_pnl),
                l.target_pnl,
                money(a.target_pnl),
                l.gap,
                money(a.gap)
            ),
            String::new(),
            l.hedge_title.to_string(),
        ];

        match &a.hedge {
            Channel::Adjustable(p) => {
                let need = match p.direction {
                    Direction::Short => l.need_short,
                    Direction::Long => l.need_long,
                };
                lines.push(format!(
                    "{}: {} {}{}{} {}{}{} {}{}",
                    need,
                    signed_plain(p.quantity, 4),
                    self.instrument,
                    l.detail_lparen,
                    l.amount_word,
                    signed(p.notional, 2),
                    l.list_sep,
                    l.entry_word,
                    money(p.entry_price),
                    l.rparen,
                ));
            }
            Channel::NotAdjustable { .. } => lines.push(l.hedge_unavailable.to_string()),
        }

        lines.push(String::new());
        lines.push(l.add_on_title.to_string());

        match &a.add_on {
            Channel::Adjustable(p) => {
                let need = match p.direction {
                    Direction::Long => l.need_buy,
                    Direction::Short => l.need_sell,
                };
                lines.push(format!(
                    "{}: {} {}{}{} {}{}{} {}{}",
                    need,
                    signed_plain(p.quantity, 4),
                    self.instrument,
                    l.detail_lparen,
                    l.amount_word,
                    signed(p.notional, 2),
                    l.list_sep,
                    l.level_word,
                    money(p.entry_price),
                    l.rparen,
                ));
                let avg = match p.new_average_price {
                    Some(px) => money(px),
                    None => l.undefined_average.to_string(),
                };
                lines.push(format!("  {} ≈ {}", l.new_average, avg));
            }
            Channel::NotAdjustable { .. } => lines.push(l.add_on_unavailable.to_string()),
        }
        lines.push(rule);

        finish(lines)
    }
}
