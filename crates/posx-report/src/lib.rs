//! posx-report
//!
//! Text rendering of `posx-analysis` results. Renderers only read the
//! structured results; no arithmetic beyond display (abs, sign, percent).
//!
//! - [`ConsoleRenderer`]: fixed-width console report (banner/rule layout)
//! - [`MarkdownRenderer`]: markdown summary
//!
//! Both are localized through [`Lang`] (`en`, `zh`).

pub mod format;

mod console;
mod lang;
mod markdown;

pub use console::ConsoleRenderer;
pub use lang::{Labels, Lang, EN, ZH};
pub use markdown::MarkdownRenderer;

use posx_analysis::{Analysis, CapitalAdjustment, CumulativeTable, ScenarioReport, TargetPrices};

/// Instrument label used when none is configured.
pub const DEFAULT_INSTRUMENT: &str = "BTC";

/// A report rendering backend. One method per report section.
pub trait Renderer {
    fn analysis(&self, analysis: &Analysis) -> String;
    fn table(&self, table: &CumulativeTable) -> String;
    fn targets(&self, targets: &TargetPrices) -> String;
    fn adjustment(&self, adjustment: &CapitalAdjustment) -> String;

    /// All sections in report order. Each section carries its own
    /// trailing spacing.
    fn report(&self, report: &ScenarioReport) -> String {
        let mut out = self.analysis(&report.analysis);
        out.push_str(&self.table(&report.table));
        out.push_str(&self.targets(&report.targets));
        out.push_str(&self.adjustment(&report.adjustment));
        out
    }
}
