use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use quoteshield_score::input::{load_report, load_report_stdin};
use quoteshield_score::pipeline::score_quote;
use quoteshield_score::report::json::render_score_json;
use quoteshield_score::report::text::render_report_text;
use quoteshield_score::report::{ReportFormat, build_context, write_reports};
use quoteshield_score::trace;

#[derive(Parser, Debug)]
#[command(name = "quoteshield-score", version)]
#[command(about = "Deterministic risk scoring for AI-extracted contractor quote reports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one extracted quote report
    Score {
        /// Path to the extracted report JSON ("-" reads stdin)
        #[arg(long)]
        input: PathBuf,
        /// Output directory; prints to stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
        /// Report format
        #[arg(long, value_enum, default_value = "json")]
        format: ReportFormat,
    },
}

fn main() {
    trace::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Score { input, out, format } => score_command(&input, out.as_deref(), format),
    }
}

fn score_command(input: &Path, out: Option<&Path>, format: ReportFormat) -> Result<(), String> {
    let report = if input.as_os_str() == "-" {
        load_report_stdin().map_err(|e| e.to_string())?
    } else {
        load_report(input).map_err(|e| e.to_string())?
    };

    let result = score_quote(&report);
    tracing::info!(
        "scored quote: final={} risk={} payment={} timeline={} scope={} warranty={} pricing={}",
        result.final_score,
        result.risk_level.name(),
        result.category_scores.payment,
        result.category_scores.timeline,
        result.category_scores.scope,
        result.category_scores.warranty,
        result.category_scores.pricing
    );

    match out {
        Some(dir) => write_reports(&report, &result, dir, format).map_err(|e| e.to_string())?,
        None => {
            if matches!(format, ReportFormat::Json | ReportFormat::Both) {
                print!("{}", render_score_json(&result));
            }
            if matches!(format, ReportFormat::Text | ReportFormat::Both) {
                print!("{}", render_report_text(&build_context(&report, &result)));
            }
        }
    }

    Ok(())
}
