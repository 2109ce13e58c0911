use serde::{Deserialize, Serialize};

/// Report language.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Zh,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Zh => "zh",
        }
    }

    pub fn labels(&self) -> &'static Labels {
        match self {
            Lang::En => &EN,
            Lang::Zh => &ZH,
        }
    }
}

impl std::str::FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Lang::En),
            "zh" => Ok(Lang::Zh),
            other => Err(format!("invalid language '{other}'. expected one of: en | zh")),
        }
    }
}

/// Every user-visible string of the console and markdown renderers.
///
/// Fragments that wrap a value (`if_tp`, `lparen`, ...) carry their own
/// spacing so both languages compose with the same code.
#[derive(Debug)]
pub struct Labels {
    // punctuation
    pub comma: &'static str,
    pub list_sep: &'static str,
    pub lparen: &'static str,
    pub rparen: &'static str,
    /// Opens the amount/price detail after a channel quantity.
    pub detail_lparen: &'static str,

    // console: analysis
    pub summary_title: &'static str,
    pub average_price: &'static str,
    pub total_quantity: &'static str,
    pub total_principal: &'static str,
    pub direction_results: &'static str,
    pub if_tp: &'static str,
    pub if_sl: &'static str,
    pub you_would: &'static str,
    pub gain: &'static str,
    pub lose: &'static str,
    pub after_tp: &'static str,
    pub after_sl: &'static str,

    // console: table
    pub table_title: &'static str,
    pub col_price: &'static str,
    pub col_amount: &'static str,
    pub col_cumulative: &'static str,
    pub col_avg: &'static str,
    pub col_tp_pnl: &'static str,
    pub col_tp_after: &'static str,
    pub col_sl_pnl: &'static str,
    pub col_sl_after: &'static str,

    // console: targets
    pub targets_title: &'static str,
    pub current_average: &'static str,
    pub net_position_amount: &'static str,
    pub principal: &'static str,
    pub direction: &'static str,
    pub target_return: &'static str,
    pub base_net_position: &'static str,
    pub base_principal: &'static str,
    pub base: &'static str,
    pub take_profit_word: &'static str,
    pub stop_loss_word: &'static str,
    pub target_price_phrase: &'static str,

    // console: adjustment
    pub adjust_title: &'static str,
    pub desired_price: &'static str,
    pub current_pnl: &'static str,
    pub target_pnl: &'static str,
    pub gap: &'static str,
    pub hedge_title: &'static str,
    pub add_on_title: &'static str,
    pub need_short: &'static str,
    pub need_long: &'static str,
    pub need_buy: &'static str,
    pub need_sell: &'static str,
    pub amount_word: &'static str,
    pub entry_word: &'static str,
    pub level_word: &'static str,
    pub new_average: &'static str,
    pub hedge_unavailable: &'static str,
    pub add_on_unavailable: &'static str,
    pub undefined_average: &'static str,

    // markdown
    pub md_position_analysis: &'static str,
    pub md_long_scenarios: &'static str,
    pub md_short_scenarios: &'static str,
    pub md_incremental: &'static str,
    pub md_target_analysis: &'static str,
    pub md_position_based: &'static str,
    pub md_capital_based: &'static str,
    pub md_capital_adjustment: &'static str,
    pub md_hedging_option: &'static str,
    pub md_spot_option: &'static str,
    pub md_position_value: &'static str,
    pub md_initial_capital: &'static str,
    pub md_based_on_position: &'static str,
    pub md_based_on_capital: &'static str,
    pub md_take_profit: &'static str,
    pub md_stop_loss: &'static str,
    pub md_take_profit_price: &'static str,
    pub md_stop_loss_price: &'static str,
    pub md_remaining_capital: &'static str,
    pub md_of: &'static str,
    pub md_profit: &'static str,
    pub md_loss: &'static str,
    pub md_long: &'static str,
    pub md_short: &'static str,
    pub md_position: &'static str,
    pub md_action: &'static str,
    pub md_quantity: &'static str,
    pub md_amount: &'static str,
    pub md_entry_price: &'static str,
    pub md_new_average_price: &'static str,
    pub md_open_short: &'static str,
    pub md_open_long: &'static str,
    pub md_buy_more: &'static str,
    pub md_sell_more: &'static str,
    pub md_cannot_hedge: &'static str,
    pub md_cannot_add_spot: &'static str,
    pub md_cumulative: &'static str,
    pub md_average_price: &'static str,
    pub md_total_quantity: &'static str,
    pub md_net_position_amount: &'static str,
    pub md_target_return: &'static str,
    pub md_target_price: &'static str,
    pub md_current_pnl: &'static str,
    pub md_target_pnl: &'static str,
    pub md_gap_to_close: &'static str,
    pub md_col_price: &'static str,
    pub md_col_position: &'static str,
    pub md_col_avg: &'static str,
    pub md_col_tp_pnl: &'static str,
    pub md_col_tp_after: &'static str,
    pub md_col_sl_pnl: &'static str,
    pub md_col_sl_after: &'static str,
}

pub static EN: Labels = Labels {
    comma: ",",
    list_sep: ", ",
    lparen: " (",
    rparen: ")",
    detail_lparen: " (",

    summary_title: "========== Position Summary ==========",
    average_price: "Average price",
    total_quantity: "Total quantity",
    total_principal: "Principal",
    direction_results: " results",
    if_tp: "If the take-profit price is ",
    if_sl: "If the stop-loss price is ",
    you_would: "you would ",
    gain: "gain",
    lose: "lose",
    after_tp: "Capital after take-profit: ",
    after_sl: "Capital after stop-loss: ",

    table_title: "Per-fill position ledger",
    col_price: "Price",
    col_amount: "Amount",
    col_cumulative: "Net position",
    col_avg: "Avg price",
    col_tp_pnl: "TP PnL",
    col_tp_after: "After TP",
    col_sl_pnl: "SL PnL",
    col_sl_after: "After SL",

    targets_title: "Target return settings",
    current_average: "Average price",
    net_position_amount: "Net position",
    principal: "Principal",
    direction: "Direction",
    target_return: "Target return",
    base_net_position: "Position return",
    base_principal: "Principal return",
    base: "base",
    take_profit_word: "Take profit",
    stop_loss_word: "Stop loss",
    target_price_phrase: " target price",

    adjust_title: "Principal return adjustment",
    desired_price: "Target price",
    current_pnl: "Current PnL",
    target_pnl: "Target PnL",
    gap: "Gap",
    hedge_title: "Option 1: hedge (opposite position)",
    add_on_title: "Option 2: add spot (same direction)",
    need_short: "Short quantity needed",
    need_long: "Long quantity needed",
    need_buy: "Buy quantity needed",
    need_sell: "Sell quantity needed",
    amount_word: "amount",
    entry_word: "entry",
    level_word: "price",
    new_average: "New average price",
    hedge_unavailable: "Hedge price equals target price; cannot adjust via hedge.",
    add_on_unavailable: "Add-on price equals target price; cannot adjust via spot.",
    undefined_average: "undefined (resulting quantity is zero)",

    md_position_analysis: "## Position Analysis",
    md_long_scenarios: "### LONG Position Scenarios",
    md_short_scenarios: "### SHORT Position Scenarios",
    md_incremental: "### Incremental Position Building",
    md_target_analysis: "## Target Price Analysis",
    md_position_based: "### Position-Based Returns",
    md_capital_based: "### Capital-Based Returns",
    md_capital_adjustment: "## Capital Adjustment Suggestions",
    md_hedging_option: "### Option 1: Hedging (Opposite Position)",
    md_spot_option: "### Option 2: Spot Addition (Same Direction)",
    md_position_value: "**Position Value:**",
    md_initial_capital: "**Initial Capital:**",
    md_based_on_position: "(Based on position value: ",
    md_based_on_capital: "(Based on initial capital: ",
    md_take_profit: "**Take Profit:**",
    md_stop_loss: "**Stop Loss:**",
    md_take_profit_price: "**Take Profit Price:**",
    md_stop_loss_price: "**Stop Loss Price:**",
    md_remaining_capital: "Remaining Capital",
    md_of: " of ",
    md_profit: "Profit",
    md_loss: "Loss",
    md_long: "LONG",
    md_short: "SHORT",
    md_position: "**Position:**",
    md_action: "**Action:**",
    md_quantity: "**Quantity:**",
    md_amount: "**Amount:**",
    md_entry_price: "**Entry Price:**",
    md_new_average_price: "**New Average Price:**",
    md_open_short: "Open Short position",
    md_open_long: "Open Long position",
    md_buy_more: "Buy more",
    md_sell_more: "Sell more",
    md_cannot_hedge: "Cannot hedge: entry price equals target price",
    md_cannot_add_spot: "Cannot add spot: entry price equals target price",
    md_cumulative: "Cumulative",
    md_average_price: "**Average Price:**",
    md_total_quantity: "**Total Quantity:**",
    md_net_position_amount: "**Net Position Amount:**",
    md_target_return: "**Target Return:**",
    md_target_price: "**Target Price:**",
    md_current_pnl: "**Current P&L:**",
    md_target_pnl: "**Target P&L:**",
    md_gap_to_close: "**Gap to Close:**",
    md_col_price: "Price",
    md_col_position: "Position",
    md_col_avg: "Avg Price",
    md_col_tp_pnl: "TP P&L",
    md_col_tp_after: "TP After",
    md_col_sl_pnl: "SL P&L",
    md_col_sl_after: "SL After",
};

pub static ZH: Labels = Labels {
    comma: "，",
    list_sep: "，",
    lparen: "（",
    rparen: "）",
    detail_lparen: " （",

    summary_title: "========== 开仓明细 ==========",
    average_price: "平均价",
    total_quantity: "总数量",
    total_principal: "总本金",
    direction_results: "（做多/做空） 计算结果",
    if_tp: "若是目标止盈价格为 ",
    if_sl: "若是目标止损价格为 ",
    you_would: "那将会 ",
    gain: "赚取",
    lose: "亏损",
    after_tp: "止盈后剩余资金为 ",
    after_sl: "止损后剩余资金为 ",

    table_title: "逐笔建仓明细表",
    col_price: "价格",
    col_amount: "仓位",
    col_cumulative: "净持仓",
    col_avg: "均价",
    col_tp_pnl: "浮盈",
    col_tp_after: "止盈后资金",
    col_sl_pnl: "浮亏",
    col_sl_after: "止损后资金",

    targets_title: "目标收益百分比设置",
    current_average: "当前均价",
    net_position_amount: "净持仓金额",
    principal: "本金",
    direction: "方向",
    target_return: "目标收益",
    base_net_position: "持仓收益",
    base_principal: "本金收益",
    base: "基数",
    take_profit_word: "止盈",
    stop_loss_word: "止损",
    target_price_phrase: " 对应目标价格",

    adjust_title: "本金收益调节建议",
    desired_price: "目标价",
    current_pnl: "当前PnL",
    target_pnl: "目标PnL",
    gap: "差额",
    hedge_title: "方式一：对冲（反向仓位）",
    add_on_title: "方式二：买现货（同向加仓）",
    need_short: "需要做空数量",
    need_long: "需要做多数量",
    need_buy: "需要买入数量",
    need_sell: "需要卖出数量",
    amount_word: "金额",
    entry_word: "建仓价",
    level_word: "价位",
    new_average: "新平均价",
    hedge_unavailable: "对冲价与目标价相同，无法通过对冲调节。",
    add_on_unavailable: "加仓价与目标价相同，无法通过买现货调节。",
    undefined_average: "无定义（加仓后数量为零）",

    md_position_analysis: "## 仓位分析",
    md_long_scenarios: "### 多头仓位场景",
    md_short_scenarios: "### 空头仓位场景",
    md_incremental: "### 增量建仓",
    md_target_analysis: "## 目标价格分析",
    md_position_based: "### 基于仓位的收益",
    md_capital_based: "### 基于资金的收益",
    md_capital_adjustment: "## 资金调整建议",
    md_hedging_option: "### 方案一：对冲（反向仓位）",
    md_spot_option: "### 方案二：现货加仓（同方向）",
    md_position_value: "**仓位价值：**",
    md_initial_capital: "**初始资金：**",
    md_based_on_position: "（基于仓位价值：",
    md_based_on_capital: "（基于初始资金：",
    md_take_profit: "**止盈：**",
    md_stop_loss: "**止损：**",
    md_take_profit_price: "**止盈价格：**",
    md_stop_loss_price: "**止损价格：**",
    md_remaining_capital: "剩余资金",
    md_of: " ",
    md_profit: "盈利",
    md_loss: "亏损",
    md_long: "多头",
    md_short: "空头",
    md_position: "**仓位：**",
    md_action: "**操作：**",
    md_quantity: "**数量：**",
    md_amount: "**金额：**",
    md_entry_price: "**入场价格：**",
    md_new_average_price: "**新平均价格：**",
    md_open_short: "开空头",
    md_open_long: "开多头",
    md_buy_more: "买入更多",
    md_sell_more: "卖出更多",
    md_cannot_hedge: "无法对冲：入场价格等于目标价格",
    md_cannot_add_spot: "无法加仓：入场价格等于目标价格",
    md_cumulative: "累计",
    md_average_price: "**平均价格：**",
    md_total_quantity: "**总数量：**",
    md_net_position_amount: "**净仓位金额：**",
    md_target_return: "**目标收益：**",
    md_target_price: "**目标价格：**",
    md_current_pnl: "**当前盈亏：**",
    md_target_pnl: "**目标盈亏：**",
    md_gap_to_close: "**需要弥补的差距：**",
    md_col_price: "价格",
    md_col_position: "仓位",
    md_col_avg: "平均价格",
    md_col_tp_pnl: "止盈盈亏",
    md_col_tp_after: "止盈后",
    md_col_sl_pnl: "止损盈亏",
    md_col_sl_after: "止损后",
};
