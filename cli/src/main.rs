//! Command-line front end for the engagement cost model
//!
//! Accepts the calculator inputs as a JSON document, per-field flags, or
//! both (flags win), and prints either a formatted text report or the raw
//! JSON report.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use cost_model_core_rs::{evaluate, format, CostBreakdown, CostReport, RawCalculatorInput};

#[derive(Parser, Debug)]
#[command(name = "cost-model")]
#[command(about = "True-cost comparison of offshore vs experienced engagements", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON document with calculator inputs ("-" reads stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Engagement duration in months
    #[arg(long)]
    duration: Option<f64>,

    /// Offshore day rate
    #[arg(long)]
    offshore_day_rate: Option<f64>,

    /// Senior staff hourly rate
    #[arg(long)]
    senior_hourly_rate: Option<f64>,

    /// Experienced in-house day rate
    #[arg(long)]
    experienced_day_rate: Option<f64>,

    /// Senior supervision hours per week (offshore)
    #[arg(long)]
    supervision_hours: Option<f64>,

    /// Rework rate in percent (offshore)
    #[arg(long)]
    rework_percent: Option<f64>,

    /// Timeline overrun rate in percent (offshore)
    #[arg(long)]
    overrun_percent: Option<f64>,

    /// Onboarding duration in weeks (offshore)
    #[arg(long)]
    onboarding_weeks: Option<f64>,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut raw = match &cli.input {
        Some(path) => read_input_document(path)?,
        None => RawCalculatorInput::default(),
    };
    apply_overrides(&mut raw, &cli);

    let report = evaluate(&raw.resolve())?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text_report(&report));
    }
    Ok(())
}

fn read_input_document(path: &PathBuf) -> Result<RawCalculatorInput> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading inputs from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    };
    serde_json::from_str(&text).with_context(|| "parsing input document".to_string())
}

fn apply_overrides(raw: &mut RawCalculatorInput, cli: &Cli) {
    let overrides = [
        ("duration", cli.duration),
        ("offshoreDayRate", cli.offshore_day_rate),
        ("seniorHourlyRate", cli.senior_hourly_rate),
        ("experiencedDayRate", cli.experienced_day_rate),
        ("supervisionHoursPerWeek", cli.supervision_hours),
        ("reworkRatePercent", cli.rework_percent),
        ("overrunRatePercent", cli.overrun_percent),
        ("onboardingWeeks", cli.onboarding_weeks),
    ];
    for (name, value) in overrides {
        if let Some(v) = value {
            raw.set_field(name, v);
        }
    }
}

fn render_breakdown(out: &mut String, title: &str, b: &CostBreakdown) {
    out.push_str(&format!("{title}\n"));
    out.push_str(&format!(
        "  Apparent cost     {:>12}\n",
        format::currency(b.apparent_cost)
    ));
    out.push_str(&format!(
        "  Supervision       {:>12}\n",
        format::currency(b.supervision_cost)
    ));
    out.push_str(&format!(
        "  Rework            {:>12}\n",
        format::currency(b.rework_cost)
    ));
    out.push_str(&format!(
        "  Overrun           {:>12}\n",
        format::currency(b.overrun_cost)
    ));
    out.push_str(&format!(
        "  Onboarding        {:>12}\n",
        format::currency(b.onboarding_cost)
    ));
    out.push_str(&format!(
        "  Hidden costs      {:>12}\n",
        format::currency(b.hidden_total)
    ));
    out.push_str(&format!(
        "  True cost         {:>12}\n",
        format::currency(b.true_cost)
    ));
}

fn render_text_report(report: &CostReport) -> String {
    let mut out = String::new();

    render_breakdown(&mut out, "Offshore engagement", &report.offshore);
    out.push_str(&format!(
        "  Cost increase     {:>12} over apparent cost\n",
        format::percentage(report.comparison.cost_increase_percent, true)
    ));
    out.push('\n');

    render_breakdown(&mut out, "Experienced engagement", &report.experienced);
    out.push('\n');

    out.push_str("Comparison\n");
    out.push_str(&format!(
        "  Rate premium      {:>12}\n",
        format::percentage(report.comparison.rate_premium_percent, true)
    ));
    out.push_str(&format!(
        "  True difference   {:>12}\n",
        format::percentage(report.comparison.true_difference_percent, true)
    ));
    out.push_str(&format!("  {}\n", report.comparison.risk_message));
    out
}
