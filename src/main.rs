/*!
 * Command-line interface for dirpage
 */

use std::process;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::Level;

use dirpage::config::{Args, Config};
use dirpage::report::{Reporter, ScanReport};
use dirpage::{Generator, Stage};

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_args(args);
    if let Err(e) = run(config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(config: Config) -> dirpage::Result<()> {
    let progress = ProgressBar::new_spinner();
    if let Ok(style) =
        ProgressStyle::default_spinner().template("{spinner:.green} {pos} entries {wide_msg:.dim.white}")
    {
        progress.set_style(style);
    }

    let generator = Generator::new(config.clone(), Arc::new(progress.clone()));
    let start_time = Instant::now();

    let result = generator.generate_with(|stage| {
        if !matches!(stage, Stage::Scanning { .. }) {
            progress.finish_and_clear();
        }
        println!("{}", stage);
        if matches!(stage, Stage::Scanning { .. }) {
            progress.enable_steady_tick(Duration::from_millis(100));
        }
    });
    progress.finish_and_clear();
    let generation = result?;

    let scan_report = ScanReport {
        output_file: generation.output_path.display().to_string(),
        duration: start_time.elapsed(),
        stats: generation.stats,
    };

    let reporter = Reporter::new(config.report_format);
    reporter.print_report(&scan_report);

    Ok(())
}
