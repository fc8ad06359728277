use clap::Parser as _;

use crate::data::RandomArray as _;

mod algorithms;
mod cli;
mod data;
mod error;
mod print;


/// Program entry point
fn main() -> std::process::ExitCode {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();

    let args = cli::Args::parse();
    let algorithm = args.algorithm;

    match run(args) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{algorithm} failed: {error}");
            std::process::ExitCode::FAILURE
        }
    }
}

/// Generate a random array, print it, sort it and print it again
fn run(args: cli::Args) -> Result<(), error::SortError> {
    let cli::Args {
        algorithm,
        size,
        modulus,
        seed,
        max_levels,
        quiet,
    } = args;

    log::info!(
        "Sorting {size} elements from 0..{modulus} with {description} (stable: {stable})",
        description = algorithm.description(),
        stable = algorithm.is_stable(),
    );
    if algorithm == cli::Algorithm::QuickIterative {
        log::info!("Work stack bound: {max_levels} levels");
    }

    let mut rng = data::seeded_rng(seed);
    let mut values = i32::random_array(size, modulus, &mut rng)?;

    print::print_array(&values, size)?;

    let spinner = sort_spinner(algorithm, quiet);
    let result = algorithm.sort(&mut values, size, max_levels);
    spinner.finish_and_clear();
    result?;

    debug_assert!(
        values.is_sorted(),
        "{values:?} is not sorted after algorithm run"
    );

    print::print_array(&values, size)
}

/// A spinner on stderr, shown while the sort runs
fn sort_spinner(algorithm: cli::Algorithm, quiet: bool) -> indicatif::ProgressBar {
    if quiet {
        return indicatif::ProgressBar::hidden();
    }

    let spinner =
        indicatif::ProgressBar::new_spinner().with_message(format!("Running {algorithm}"));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}
