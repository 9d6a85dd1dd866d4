//! gitetch: draw pixel art onto a git contribution graph
//!
//! This binary converts a small black-and-white raster into a batch of
//! dated, empty commits so the contribution graph renders the image as
//! pixel art once pushed.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use chrono::Datelike;
use clap::Parser;
use tracing::{info, warn};

use gitetch::config::Config;
use gitetch::executor::{self, ExecutionReport};
use gitetch::plan;
use gitetch::report::PlanReport;
use gitetch_git::{CommitSurface, GitRepo};
use gitetch_image::{ALPHA_THRESHOLD, MAX_GRID_HEIGHT, MAX_GRID_WIDTH, load_active_pixels};

fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr so dry-run plan output on stdout stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(io::stderr)
        .init();

    match run(&config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> anyhow::Result<ExitCode> {
    if config.defaulted_to_dry_run() {
        warn!("neither --dry-run nor --execute specified; defaulting to --dry-run");
    }

    let current_year = chrono::Local::now().date_naive().year();
    if config.year_is_unusual(current_year) {
        warn!(
            year = config.year,
            current_year, "target year is far from the current year; the profile graph may not display it"
        );
    }

    // Precondition: inside a working tree, before any core logic runs
    let mut repo = GitRepo::discover(&config.repo)?;

    let pixels = load_active_pixels(
        &config.image_path,
        MAX_GRID_WIDTH,
        MAX_GRID_HEIGHT,
        ALPHA_THRESHOLD,
    )?;
    info!(
        image = %config.image_path.display(),
        active = pixels.len(),
        "sampled image"
    );

    let anchor = plan::first_sunday(config.year);
    info!(%anchor, year = config.year, "first Sunday of the graph");

    let existing = if config.force {
        info!("force enabled; skipping the existing-commit check");
        Default::default()
    } else {
        let dates = repo.existing_dates()?;
        info!(count = dates.len(), "found dates with existing commits");
        dates
    };

    let dates = plan::build_plan(&pixels, anchor, config.year, &existing, config.force);
    if dates.is_empty() {
        println!("No new commits needed based on the image and existing history.");
        return Ok(ExitCode::SUCCESS);
    }

    let report = PlanReport {
        year: config.year,
        anchor,
        prefix: &config.prefix,
        dates: &dates,
    };

    if config.effective_dry_run() {
        if config.json {
            println!("{}", report.to_json()?);
        } else {
            println!("{}", report.render_text());
            println!();
            println!("To apply these changes, re-run with the --execute flag.");
        }
        return Ok(ExitCode::SUCCESS);
    }

    if !confirm(dates.len())? {
        // Declining the prompt is a clean abort, not an error
        eprintln!("Aborted by user.");
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = executor::execute(&mut repo, &dates, &config.prefix);
    print_summary(&outcome);

    match &outcome.failure {
        None => Ok(ExitCode::SUCCESS),
        Some(failure) => {
            eprintln!(
                "Stopping due to error during commit for {}: {}",
                failure.date, failure.error
            );
            eprintln!("Please check your git repository status.");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Ask for literal "yes" on stdin before mutating the repository
fn confirm(count: usize) -> io::Result<bool> {
    print!("Proceed with making {count} commits? (yes/no): ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}

fn print_summary(outcome: &ExecutionReport) {
    println!();
    println!("--- Summary ---");
    println!("Total pixels to commit: {}", outcome.planned);
    println!("Successfully made {} commits.", outcome.committed);
    if outcome.all_committed() {
        println!("All scheduled commits processed successfully!");
        println!("Don't forget to `git push` if you want to see this on a remote.");
    }
}
