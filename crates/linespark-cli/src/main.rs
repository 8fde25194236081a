//! linespark: render a JSON series into an SVG sparkline.
//!
//! Reads a JSON array of numbers and `null`s, renders it with the
//! configured options, and writes the SVG markup to stdout or a file.
//!
//! # Usage
//!
//! ```text
//! echo '[1, 3, null, 2]' | linespark --smooth --baseline 2 > chart.svg
//! linespark --config-json '{"width": 200, "color": "#08f"}' series.json
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use linespark::{ChartConfig, ConfigOverrides, Sample, SparklineChart};
use serde::Serialize;

/// Render a single-series line chart as SVG.
///
/// Each option flag given becomes part of a per-render override layer
/// applied on top of `--config-json` (if any) and the built-in defaults.
#[derive(Parser)]
#[command(name = "linespark", version)]
struct Cli {
    /// Path to a JSON array of numbers/nulls. Reads stdin when omitted or `-`.
    series_path: Option<PathBuf>,

    /// SVG width in pixels.
    #[arg(long, allow_negative_numbers = true)]
    width: Option<f64>,

    /// SVG height in pixels.
    #[arg(long, allow_negative_numbers = true)]
    height: Option<f64>,

    /// Stroke color (any CSS color).
    #[arg(long)]
    color: Option<String>,

    /// Stroke width.
    #[arg(long, allow_negative_numbers = true)]
    line_width: Option<f64>,

    /// Horizontal padding.
    #[arg(long, allow_negative_numbers = true)]
    padding_x: Option<f64>,

    /// Vertical padding.
    #[arg(long, allow_negative_numbers = true)]
    padding_y: Option<f64>,

    /// Connect samples with cubic curves.
    #[arg(long)]
    smooth: bool,

    /// Connect samples with straight lines, even if `--config-json` enables smoothing.
    #[arg(long, conflicts_with = "smooth")]
    no_smooth: bool,

    /// Draw a dashed reference line at this value.
    #[arg(long, allow_negative_numbers = true)]
    baseline: Option<f64>,

    /// Base configuration as a JSON object (camelCase keys).
    ///
    /// Applied with `configure` before rendering; the individual flags
    /// still override it for this render.
    #[arg(long)]
    config_json: Option<String>,

    /// Write SVG output to file instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Print the sample count and effective configuration to stderr.
    #[arg(long, short)]
    verbose: bool,

    /// Print a JSON object (`{"svg": ...}` or `{"error": ...}`) instead of raw SVG.
    #[arg(long)]
    json: bool,
}

/// JSON-mode report.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
enum Report {
    Svg(String),
    Error(String),
}

/// Build the per-render override layer from individual flags.
fn overrides_from_cli(cli: &Cli) -> ConfigOverrides {
    ConfigOverrides {
        width: cli.width,
        height: cli.height,
        color: cli.color.clone(),
        line_width: cli.line_width,
        padding_x: cli.padding_x,
        padding_y: cli.padding_y,
        smooth: if cli.smooth {
            Some(true)
        } else if cli.no_smooth {
            Some(false)
        } else {
            None
        },
        baseline: cli.baseline.map(Into::into),
    }
}

/// Build the chart instance, seeding its base from `--config-json`.
fn chart_from_cli(cli: &Cli) -> Result<SparklineChart, String> {
    let mut chart = SparklineChart::new();
    if let Some(ref json) = cli.config_json {
        let base: ConfigOverrides =
            serde_json::from_str(json).map_err(|e| format!("Error parsing --config-json: {e}"))?;
        chart.configure(&base);
    }
    Ok(chart)
}

fn read_series(path: Option<&PathBuf>) -> Result<Vec<Sample>, String> {
    let text = match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p)
            .map_err(|e| format!("Error reading {}: {e}", p.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("Error reading stdin: {e}"))?;
            buf
        }
    };
    serde_json::from_str(&text).map_err(|e| format!("Error parsing series: {e}"))
}

fn run(cli: &Cli) -> Result<String, String> {
    let chart = chart_from_cli(cli)?;
    let samples = read_series(cli.series_path.as_ref())?;
    let overrides = overrides_from_cli(cli);

    if cli.verbose {
        let config: ChartConfig = chart.effective_config(Some(&overrides));
        eprintln!("Samples: {}", samples.len());
        eprintln!("Config: {config:?}");
    }

    chart
        .build_chart(&samples, Some(&overrides))
        .map_err(|e| e.to_string())
}

fn emit(cli: &Cli, text: &str) -> Result<(), String> {
    match cli.output {
        Some(ref path) => {
            std::fs::write(path, text)
                .map_err(|e| format!("Error writing {}: {e}", path.display()))?;
            eprintln!("SVG written to {} ({} bytes)", path.display(), text.len());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(&cli);
    let failed = result.is_err();

    let text = if cli.json {
        let report = match result {
            Ok(svg) => Report::Svg(svg),
            Err(msg) => Report::Error(msg),
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Error serializing report: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        match result {
            Ok(svg) => svg,
            Err(msg) => {
                eprintln!("{msg}");
                return ExitCode::FAILURE;
            }
        }
    };

    if let Err(msg) = emit(&cli, &text) {
        eprintln!("{msg}");
        return ExitCode::FAILURE;
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn flags_become_overrides() {
        let cli = Cli::parse_from([
            "linespark",
            "--width",
            "200",
            "--smooth",
            "--baseline",
            "-1.5",
            "series.json",
        ]);
        let overrides = overrides_from_cli(&cli);
        assert_eq!(overrides.width, Some(200.0));
        assert_eq!(overrides.smooth, Some(true));
        assert_eq!(overrides.baseline, Some(linespark::Baseline::Value(-1.5)));
        assert_eq!(overrides.height, None);
        assert_eq!(cli.series_path, Some(PathBuf::from("series.json")));
    }

    #[test]
    fn absent_smooth_flag_leaves_base_alone() {
        let cli = Cli::parse_from(["linespark", "--config-json", r#"{"smooth": true}"#]);
        let chart = chart_from_cli(&cli).unwrap();
        let config = chart.effective_config(Some(&overrides_from_cli(&cli)));
        assert!(config.smooth);
    }

    #[test]
    fn no_smooth_overrides_base_for_one_render() {
        let cli = Cli::parse_from([
            "linespark",
            "--config-json",
            r#"{"smooth": true}"#,
            "--no-smooth",
            "series.json",
        ]);
        let chart = chart_from_cli(&cli).unwrap();
        let overrides = overrides_from_cli(&cli);
        assert_eq!(overrides.smooth, Some(false));
        assert!(!chart.effective_config(Some(&overrides)).smooth);
        assert!(chart.base_config().smooth);
    }

    #[test]
    fn smooth_and_no_smooth_conflict() {
        let result = Cli::try_parse_from(["linespark", "--smooth", "--no-smooth"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbose_is_off_by_default() {
        assert!(!Cli::parse_from(["linespark"]).verbose);
        assert!(Cli::parse_from(["linespark", "-v"]).verbose);
    }

    #[test]
    fn bad_config_json_is_reported() {
        let cli = Cli::parse_from(["linespark", "--config-json", "{not json"]);
        let err = chart_from_cli(&cli).unwrap_err();
        assert!(err.starts_with("Error parsing --config-json"), "{err}");
    }

    #[test]
    fn report_serializes_with_tag() {
        let json = serde_json::to_string(&Report::Error("boom".to_owned())).unwrap();
        assert_eq!(json, r#"{"error":"boom"}"#);
    }
}
