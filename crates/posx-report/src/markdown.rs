use std::fmt::Write as _;

use posx_analysis::{
    Analysis, CapitalAdjustment, CapitalBase, Channel, CumulativeTable, Outcome, TargetPrices,
};
use posx_portfolio::Direction;

use crate::format::{currency, percent, plain};
use crate::lang::{Labels, Lang};
use crate::{Renderer, DEFAULT_INSTRUMENT};

/// Markdown summary: headings, bold key/value lines and a pipe table.
#[derive(Clone, Debug)]
pub struct MarkdownRenderer {
    lang: Lang,
    instrument: String,
}

impl MarkdownRenderer {
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

    fn qty(&self, v: f64) -> String {
        format!("{} {}", plain(v, 6), self.instrument)
    }

    fn signed_qty(&self, v: f64) -> String {
        let sign = if v >= 0.0 { "+" } else { "" };
        format!("{sign}{}", self.qty(v))
    }

    fn direction_label(&self, d: Direction) -> &'static str {
        match d {
            Direction::Long => self.l().md_long,
            Direction::Short => self.l().md_short,
        }
    }

    fn outcome_block(&self, md: &mut String, o: &Outcome) {
        let l = self.l();
        let verdict = |pnl: f64| if pnl >= 0.0 { l.md_profit } else { l.md_loss };

        let _ = writeln!(
            md,
            "{} {}{}{}",
            l.md_take_profit,
            verdict(o.tp_pnl),
            l.md_of,
            currency(o.tp_pnl.abs())
        );
        let _ = writeln!(md, "- {}: {}\n", l.md_remaining_capital, currency(o.tp_after));
        let _ = writeln!(
            md,
            "{} {}{}{}",
            l.md_stop_loss,
            verdict(o.sl_pnl),
            l.md_of,
            currency(o.sl_pnl.abs())
        );
        let _ = writeln!(md, "- {}: {}\n", l.md_remaining_capital, currency(o.sl_after));
    }
}

impl Renderer for MarkdownRenderer {
    fn analysis(&self, a: &Analysis) -> String {
        let l = self.l();
        let mut md = String::new();

        let _ = writeln!(md, "{}\n", l.md_position_analysis);
        let _ = writeln!(md, "{} {}", l.md_average_price, currency(a.average_price));
        let _ = writeln!(md, "{} {}", l.md_total_quantity, self.qty(a.quantity));
        let _ = writeln!(md, "{} {}\n", l.md_position_value, currency(a.net_notional));

        let _ = writeln!(md, "{}\n", l.md_long_scenarios);
        self.outcome_block(&mut md, &a.long);
        let _ = writeln!(md, "{}\n", l.md_short_scenarios);
        self.outcome_block(&mut md, &a.short);

        md
    }

    fn table(&self, t: &CumulativeTable) -> String {
        let l = self.l();
        let mut md = String::new();

        let _ = writeln!(md, "{}\n", l.md_incremental);
        let _ = writeln!(
            md,
            "| # | {} | {} | {} | {} | {} | {} | {} | {} |",
            l.md_col_price,
            l.md_col_position,
            l.md_cumulative,
            l.md_col_avg,
            l.md_col_tp_pnl,
            l.md_col_tp_after,
            l.md_col_sl_pnl,
            l.md_col_sl_after
        );
        md.push_str(
            "|---|------:|----------:|-----------:|----------:|--------:|---------:|--------:|---------:|\n",
        );

        for r in &t.rows {
            let _ = writeln!(
                md,
                "| {} | {} | {} | {} | {} | {} | {} | {} | {} |",
                r.index,
                currency(r.price),
                currency(r.amount),
                currency(r.cumulative_notional),
                currency(r.average_price),
                currency(r.tp_pnl),
                currency(r.tp_after),
                currency(r.sl_pnl),
                currency(r.sl_after)
            );
        }
        md.push('\n');

        md
    }

    fn targets(&self, t: &TargetPrices) -> String {
        let l = self.l();
        let mut md = String::new();

        let _ = writeln!(md, "{}\n", l.md_target_analysis);
        let _ = writeln!(md, "{} {}", l.md_position, self.direction_label(t.direction));
        let _ = writeln!(md, "{} {}", l.md_average_price, currency(t.average_price));
        let _ = writeln!(md, "{} {}", l.md_quantity, self.qty(t.quantity));
        let _ = writeln!(md, "{} {}", l.md_net_position_amount, currency(t.net_notional));
        let _ = writeln!(md, "{} {}", l.md_initial_capital, currency(t.initial_capital));
        let _ = writeln!(md, "{} {}\n", l.md_target_return, percent(t.return_pct));

        for pair in &t.pairs {
            let (heading, based_on) = match pair.base {
                CapitalBase::NetPosition => (l.md_position_based, l.md_based_on_position),
                CapitalBase::Principal => (l.md_capital_based, l.md_based_on_capital),
            };
            let _ = writeln!(md, "{heading}");
            let _ = writeln!(md, "{}{}{}\n", based_on, currency(pair.base_amount), l.rparen);
            let _ = writeln!(
                md,
                "{} {}",
                l.md_take_profit_price,
                currency(pair.take_profit_price)
            );
            let _ = writeln!(
                md,
                "{} {}\n",
                l.md_stop_loss_price,
                currency(pair.stop_loss_price)
            );
        }

        md
    }

    fn adjustment(&self, a: &CapitalAdjustment) -> String {
        let l = self.l();
        let mut md = String::new();

        let _ = writeln!(md, "{}\n", l.md_capital_adjustment);
        let _ = writeln!(md, "{} {}", l.md_position, self.direction_label(a.direction));
        let _ = writeln!(md, "{} {}", l.md_target_price, currency(a.desired_price));
        let _ = writeln!(md, "{} {}", l.md_current_pnl, currency(a.current_pnl));
        let _ = writeln!(md, "{} {}", l.md_target_pnl, currency(a.target_pnl));
        let _ = writeln!(md, "{} {}\n", l.md_gap_to_close, currency(a.gap));

        let _ = writeln!(md, "{}\n", l.md_hedging_option);
        match &a.hedge {
            Channel::Adjustable(p) => {
                let action = match p.direction {
                    Direction::Short => l.md_open_short,
                    Direction::Long => l.md_open_long,
                };
                let _ = writeln!(md, "{} {}", l.md_action, action);
                let _ = writeln!(md, "{} {}", l.md_quantity, self.signed_qty(p.quantity));
                let _ = writeln!(md, "{} {}", l.md_amount, currency(p.notional));
                let _ = writeln!(md, "{} {}\n", l.md_entry_price, currency(p.entry_price));
            }
            Channel::NotAdjustable { .. } => {
                let _ = writeln!(md, "*{}*\n", l.md_cannot_hedge);
            }
        }

        let _ = writeln!(md, "{}\n", l.md_spot_option);
        match &a.add_on {
            Channel::Adjustable(p) => {
                let action = match p.direction {
                    Direction::Long => l.md_buy_more,
                    Direction::Short => l.md_sell_more,
                };
                let new_average = match p.new_average_price {
                    Some(px) => currency(px),
                    None => l.undefined_average.to_string(),
                };
                let _ = writeln!(md, "{} {} {}", l.md_action, action, self.instrument);
                let _ = writeln!(md, "{} {}", l.md_quantity, self.signed_qty(p.quantity));
                let _ = writeln!(md, "{} {}", l.md_amount, currency(p.notional));
                let _ = writeln!(md, "{} {}", l.md_entry_price, currency(p.entry_price));
                let _ = writeln!(md, "{} {}\n", l.md_new_average_price, new_average);
            }
            Channel::NotAdjustable { .. } => {
                let _ = writeln!(md, "*{}*\n", l.md_cannot_add_spot);
            }
        }

        md
    }
}
