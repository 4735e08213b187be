use clap::Parser;
use proplens::{
    AnalysisRecord, GenerationError, GeneratorConfig, RealtorBrandingInfo, ReportConfiguration,
    ReportGeneratorBuilder,
};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Renders a property investment analysis into a PDF report.
#[derive(Parser, Debug)]
#[command(name = "proplens", version, about)]
struct Args {
    /// Analysis record (JSON).
    record: PathBuf,

    /// Output PDF path.
    #[arg(short, long, default_value = "report.pdf")]
    output: PathBuf,

    /// Report configuration: selected sections, format, notes (JSON).
    #[arg(short = 'c', long)]
    report_config: Option<PathBuf>,

    /// Realtor branding for header and footer (JSON).
    #[arg(short, long)]
    branding: Option<PathBuf>,

    /// Generator settings: page limits, fonts, parallelism (JSON).
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Render charts on the calling thread.
    #[arg(long)]
    sequential: bool,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, GenerationError> {
    let source = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&source)?)
}

fn run(args: Args) -> Result<(), GenerationError> {
    let record: AnalysisRecord = read_json(&args.record)?;
    let report_config: ReportConfiguration = match &args.report_config {
        Some(path) => read_json(path)?,
        None => ReportConfiguration::default(),
    };
    let branding: Option<RealtorBrandingInfo> = args
        .branding
        .as_deref()
        .map(read_json::<RealtorBrandingInfo>)
        .transpose()?;

    let mut settings = match &args.settings {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    if args.sequential {
        settings.parallel_charts = false;
    }

    let generator = ReportGeneratorBuilder::new().with_config(settings).build()?;
    let report = generator.generate_report(&record, &report_config, branding.as_ref())?;
    fs::write(&args.output, &report.bytes)?;

    println!(
        "Wrote {} ({} pages, grade {}, score {})",
        args.output.display(),
        report.page_count,
        report.grade.grade,
        report.grade.score
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
