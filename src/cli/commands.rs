//! Command implementation for the mission analyzer CLI
//!
//! Runs the single batch pipeline: load, filter, report, chart, export.

use crate::chart::{ChartTarget, render_chart};
use crate::cli::args::Args;
use crate::config::AnalyzerConfig;
use crate::filters::{CompositeFilter, FilterOptions};
use crate::loader::{load_records, save_records};
use crate::report::{SummaryStats, format_summary, format_table};
use crate::Result;
use colored::Colorize;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Message printed when a chart is requested for an empty selection
pub const EMPTY_PLOT_MESSAGE: &str = "Not enough data to generate a plot.";

/// What a run produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Records read from the data file
    pub records_loaded: usize,
    /// Records kept by the filters
    pub records_matched: usize,
    /// Chart file written, if any
    pub chart_path: Option<PathBuf>,
    /// Export file written, if any
    pub export_path: Option<PathBuf>,
}

/// Main command runner
///
/// 1. Set up logging and validate arguments
/// 2. Resolve layered configuration and build the filter
/// 3. Load and filter the records
/// 4. Print the table, then the summary and chart if requested
/// 5. Export the filtered records if requested
pub fn run(args: Args) -> Result<RunSummary> {
    setup_logging(&args);
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    if args.no_color {
        colored::control::set_override(false);
    }

    let config = AnalyzerConfig::load_layered(args.data.clone())?
        .with_case_sensitive(args.case_sensitive);
    debug!("Loaded configuration: {:?}", config);

    let options = FilterOptions {
        case_sensitive: config.case_sensitive,
        ..args.to_filter_options()
    };
    let filter = CompositeFilter::from_options(&options)?;
    info!("Applying filters: {}", filter.describe());

    let records = load_records(&config.data_path, config.country_separator)?;
    let matched = filter.apply(&records);

    let mut summary = RunSummary {
        records_loaded: records.len(),
        records_matched: matched.len(),
        ..Default::default()
    };

    print!("{}", format_table(&matched, config.country_separator));

    if args.summary {
        let stats = SummaryStats::from_records(&matched);
        println!();
        print!("{}", format_summary(&stats));
    }

    if let Some(target) = args.chart_target() {
        println!();
        match render_chart(&matched, &target, &config.chart) {
            Ok(()) => {
                if let ChartTarget::File(path) = target {
                    println!("{} {}", "Chart saved to".green(), path.display());
                    summary.chart_path = Some(path);
                }
            }
            Err(error) if error.is_warning() && matched.is_empty() => {
                warn!("{}", error);
                println!("{}", EMPTY_PLOT_MESSAGE.yellow());
            }
            Err(error) => return Err(error),
        }
    }

    if let Some(path) = &args.export {
        save_records(path, &matched, config.country_separator)?;
        println!(
            "{} {} missions to {}",
            "Exported".green(),
            matched.len(),
            path.display()
        );
        summary.export_path = Some(path.clone());
    }

    info!(
        "Done: {} of {} missions matched",
        summary.records_matched, summary.records_loaded
    );
    Ok(summary)
}

/// Set up logging based on command line arguments
///
/// `RUST_LOG` takes precedence over `-v`/`-q`. Logs go to stderr so stdout
/// carries only the report.
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mission_analyzer={}", log_level)));

    // A subscriber may already be installed when run() is called more than once
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_ansi(!args.no_color)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();
}
