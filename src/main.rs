use std::io;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use esg_engine::config::AppConfig;
use esg_engine::error::AppError;
use esg_engine::snapshot::{self, QuestionnaireSnapshot};
use esg_engine::{run_all, run_module, telemetry, ModuleId, ModuleResult};

#[derive(Parser, Debug)]
#[command(
    name = "ESG Questionnaire Engine",
    about = "Compute ESG questionnaire module results from saved answer snapshots",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the questionnaire modules this engine understands.
    Modules,
    /// Compute one module from a snapshot and print its full calculation trace.
    Preview(PreviewArgs),
    /// Compute every module from a snapshot and summarise the results.
    Report(ReportArgs),
}

#[derive(Args, Debug)]
struct PreviewArgs {
    /// Module code to compute, e.g. A4 or S1.
    #[arg(long)]
    module: String,
    /// Snapshot file to read; falls back to APP_SNAPSHOT_PATH.
    #[arg(long)]
    snapshot: Option<PathBuf>,
    /// Print the result as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Snapshot file to read; falls back to APP_SNAPSHOT_PATH.
    #[arg(long)]
    snapshot: Option<PathBuf>,
    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ModulePayload {
    module: &'static str,
    label: &'static str,
    planned: bool,
    #[serde(flatten)]
    result: ModuleResult,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PreviewPayload {
    organization: String,
    #[serde(flatten)]
    module: ModulePayload,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportPayload {
    organization: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved_at: Option<DateTime<Utc>>,
    results: Vec<ModulePayload>,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Modules) {
        Command::Modules => {
            render_module_list();
            Ok(())
        }
        Command::Preview(args) => run_preview(args),
        Command::Report(args) => run_report(args),
    }
}

fn run_preview(args: PreviewArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let id = ModuleId::from_code(&args.module)?;
    let path = resolve_snapshot_path(args.snapshot, &config)?;
    let loaded = snapshot::load(&path)?;
    info!(module = id.code(), path = %path.display(), "previewing module");
    let result = run_module(id, &loaded.modules);
    if args.json {
        let payload = PreviewPayload {
            organization: loaded.organization.clone(),
            module: module_payload(id, result),
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        render_preview(&loaded, id, &result, config.report.decimals);
    }
    Ok(())
}

fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let path = resolve_snapshot_path(args.snapshot, &config)?;
    let loaded = snapshot::load(&path)?;
    info!(organization = %loaded.organization, path = %path.display(), "computing report");
    if args.json {
        let payload = report_payload(&loaded);
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        let results = run_all(&loaded.modules);
        render_report(&loaded, &results, config.report.decimals);
    }
    Ok(())
}

fn resolve_snapshot_path(explicit: Option<PathBuf>, config: &AppConfig) -> Result<PathBuf, AppError> {
    explicit
        .or_else(|| config.report.default_snapshot.clone())
        .ok_or_else(|| {
            AppError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                "no snapshot path given; pass --snapshot or set APP_SNAPSHOT_PATH",
            ))
        })
}

fn module_payload(id: ModuleId, result: ModuleResult) -> ModulePayload {
    ModulePayload {
        module: id.code(),
        label: id.label(),
        planned: id.is_planned(),
        result,
    }
}

fn report_payload(loaded: &QuestionnaireSnapshot) -> ReportPayload {
    let results = run_all(&loaded.modules)
        .into_iter()
        .map(|(id, result)| module_payload(id, result))
        .collect();
    ReportPayload {
        organization: loaded.organization.clone(),
        saved_at: loaded.saved_at,
        results,
    }
}

fn render_module_list() {
    println!("Questionnaire modules");
    for id in ModuleId::ordered() {
        if id.is_planned() {
            println!("- {}: {} (planned)", id.code(), id.label());
        } else {
            println!("- {}: {}", id.code(), id.label());
        }
    }
}

fn render_preview(loaded: &QuestionnaireSnapshot, id: ModuleId, result: &ModuleResult, decimals: u8) {
    println!("Module {}: {}", id.code(), id.label());
    println!("Organization: {}", loaded.organization);
    println!("Value: {} {}", format_value(result.value, decimals), result.unit);
    render_section("Assumptions", &result.assumptions);
    render_section("Warnings", &result.warnings);
    render_section("Trace", &result.trace);
}

fn render_report(
    loaded: &QuestionnaireSnapshot,
    results: &[(ModuleId, ModuleResult)],
    decimals: u8,
) {
    println!("ESG questionnaire report");
    println!("Organization: {}", loaded.organization);
    match loaded.saved_at {
        Some(saved_at) => println!("Saved: {}", saved_at.format("%Y-%m-%d %H:%M UTC")),
        None => println!("Saved: not recorded"),
    }

    println!("\nModule values");
    for (id, result) in results {
        if id.is_planned() {
            println!(
                "- {}: {} {} ({}, planned)",
                id.code(),
                format_value(result.value, decimals),
                result.unit,
                id.label()
            );
        } else {
            println!(
                "- {}: {} {} ({})",
                id.code(),
                format_value(result.value, decimals),
                result.unit,
                id.label()
            );
        }
    }

    let mut assumptions = Vec::new();
    let mut warnings = Vec::new();
    for (id, result) in results {
        for line in &result.assumptions {
            assumptions.push(format!("[{}] {}", id.code(), line));
        }
        for line in &result.warnings {
            warnings.push(format!("[{}] {}", id.code(), line));
        }
    }
    render_section("Assumptions", &assumptions);
    render_section("Warnings", &warnings);
}

fn render_section(heading: &str, lines: &[String]) {
    if lines.is_empty() {
        println!("\n{heading}: none");
        return;
    }
    println!("\n{heading}");
    for line in lines {
        println!("- {line}");
    }
}

fn format_value(value: f64, decimals: u8) -> String {
    format!("{value:.prec$}", prec = decimals as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use esg_engine::config::{AppEnvironment, ReportConfig, TelemetryConfig};
    use esg_engine::QuestionnaireInput;

    fn sample_snapshot() -> QuestionnaireSnapshot {
        let modules: QuestionnaireInput = serde_json::from_value(serde_json::json!({
            "A4": {
                "entries": [
                    {
                        "label": "Cold store",
                        "systemType": "commercialRefrigeration",
                        "refrigerantKey": "r134a",
                        "systemChargeKg": 10.0,
                        "leakagePercent": 10.0
                    }
                ]
            }
        }))
        .expect("sample questionnaire should deserialize");
        QuestionnaireSnapshot {
            organization: "Nordhavn Logistics A/S".to_string(),
            saved_at: None,
            modules,
        }
    }

    fn sample_config(default_snapshot: Option<PathBuf>) -> AppConfig {
        AppConfig {
            environment: AppEnvironment::Test,
            report: ReportConfig {
                decimals: 1,
                default_snapshot,
            },
            telemetry: TelemetryConfig {
                log_level: "info".to_string(),
            },
        }
    }

    #[test]
    fn format_value_respects_configured_decimals() {
        assert_eq!(format_value(1430.0, 1), "1430.0");
        assert_eq!(format_value(0.25, 2), "0.25");
        assert_eq!(format_value(100.0, 0), "100");
    }

    #[test]
    fn snapshot_path_prefers_the_explicit_argument() {
        let config = sample_config(Some(PathBuf::from("/etc/esg/default.json")));
        let path = resolve_snapshot_path(Some(PathBuf::from("answers.json")), &config)
            .expect("explicit path should resolve");
        assert_eq!(path, PathBuf::from("answers.json"));
    }

    #[test]
    fn snapshot_path_falls_back_to_the_configured_default() {
        let config = sample_config(Some(PathBuf::from("/etc/esg/default.json")));
        let path = resolve_snapshot_path(None, &config).expect("default path should resolve");
        assert_eq!(path, PathBuf::from("/etc/esg/default.json"));
    }

    #[test]
    fn snapshot_path_requires_an_argument_or_configured_default() {
        let config = sample_config(None);
        let err = resolve_snapshot_path(None, &config).expect_err("missing path should error");
        assert!(err.to_string().contains("--snapshot"));
    }

    #[test]
    fn preview_payload_serializes_module_code_and_value() {
        let loaded = sample_snapshot();
        let result = run_module(ModuleId::A4, &loaded.modules);
        let payload = PreviewPayload {
            organization: loaded.organization.clone(),
            module: module_payload(ModuleId::A4, result),
        };
        let json = serde_json::to_value(&payload).expect("payload should serialize");
        assert_eq!(json["organization"], "Nordhavn Logistics A/S");
        assert_eq!(json["module"], "A4");
        assert_eq!(json["planned"], false);
        assert_eq!(json["value"], 10.0 * (10.0 / 100.0) * 1430.0);
        assert_eq!(json["unit"], "kg CO2e");
    }

    #[test]
    fn report_payload_covers_every_module_in_order() {
        let loaded = sample_snapshot();
        let payload = report_payload(&loaded);
        assert_eq!(payload.results.len(), ModuleId::ordered().len());
        assert_eq!(payload.results[0].module, "A1");
        let refrigerants = payload
            .results
            .iter()
            .find(|row| row.module == "A4")
            .expect("report should include the refrigerants module");
        assert!(refrigerants.result.value > 0.0);
    }
}
