use anyhow::{Context, Result};
use posx_analysis::run_scenario;
use posx_report::{ConsoleRenderer, Lang, MarkdownRenderer, Renderer};
use tracing::{debug, info};

use super::{resolve_config, OutputFormat, ReportArgs, Section};

fn renderer(format: OutputFormat, lang: Lang, instrument: &str) -> Option<Box<dyn Renderer>> {
    match format {
        OutputFormat::Console => Some(Box::new(
            ConsoleRenderer::new(lang).with_instrument(instrument),
        )),
        OutputFormat::Markdown => Some(Box::new(
            MarkdownRenderer::new(lang).with_instrument(instrument),
        )),
        OutputFormat::Json => None,
    }
}

pub fn run(section: Section, args: &ReportArgs) -> Result<()> {
    let resolved = resolve_config(args)?;
    let cfg = &resolved.analysis;
    let scenario = cfg.to_scenario();

    info!(
        config_hash = resolved.config_hash.as_deref().unwrap_or("builtin-sample"),
        fills = scenario.fills.len(),
        direction = %scenario.direction,
        section = section.as_str(),
        "position report start"
    );

    let out = match renderer(args.format, cfg.report.language, &cfg.instrument) {
        Some(r) => render_text(section, &scenario, r.as_ref()),
        None => render_json(section, &scenario),
    }
    .with_context(|| format!("{} failed", section.as_str()))?;

    print!("{out}");
    if !out.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn render_text(
    section: Section,
    scenario: &posx_analysis::Scenario,
    r: &dyn Renderer,
) -> Result<String> {
    debug!(section = section.as_str(), "rendering text");
    Ok(match section {
        Section::All => r.report(&run_scenario(scenario)?),
        Section::Analysis => r.analysis(&scenario.analysis()?),
        Section::Table => r.table(&scenario.table()?),
        Section::Targets => r.targets(&scenario.targets()?),
        Section::Adjustment => r.adjustment(&scenario.adjustment()?),
    })
}

fn render_json(section: Section, scenario: &posx_analysis::Scenario) -> Result<String> {
    debug!(section = section.as_str(), "rendering json");
    let s = match section {
        Section::All => serde_json::to_string_pretty(&run_scenario(scenario)?)?,
        Section::Analysis => serde_json::to_string_pretty(&scenario.analysis()?)?,
        Section::Table => serde_json::to_string_pretty(&scenario.table()?)?,
        Section::Targets => serde_json::to_string_pretty(&scenario.targets()?)?,
        Section::Adjustment => serde_json::to_string_pretty(&scenario.adjustment()?)?,
    };
    Ok(s)
}
