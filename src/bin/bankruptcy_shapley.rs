use bankruptcy_shapley::{
    Algorithm, AlgorithmResult, Allocation, BankruptcyError, ComputeConfig, DEFAULT_ROUND_DIGITS,
    GameRecord, Result, monte_carlo::DEFAULT_SAMPLES,
};
use clap::Parser;
use serde::Serialize;
use std::{path::PathBuf, process::ExitCode};
use tabled::{Table, settings::Style};

/// Shapley value of bankruptcy games
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Estate to divide
    #[arg(long, requires = "claims", conflicts_with = "input")]
    estate: Option<f64>,

    /// Comma-separated claims, e.g. 100,200,300
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    claims: Vec<f64>,

    /// CSV file of games with columns label,estate,claims (claims separated by ';')
    #[arg(long)]
    input: Option<PathBuf>,

    /// Algorithm to run (exact, dp, primal, dual, mc or a full name), or all
    #[arg(long, default_value = "all")]
    algorithm: String,

    /// Monte Carlo permutation count
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    /// Monte Carlo seed
    #[arg(long)]
    seed: Option<u64>,

    /// Decimal places in the output
    #[arg(long, default_value_t = DEFAULT_ROUND_DIGITS)]
    round_digits: u32,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    game: String,
    algorithm: &'static str,
    estate: f64,
    claims: Vec<f64>,
    #[serde(flatten)]
    result: AlgorithmResult,
}

fn games(cli: &Cli) -> Result<Vec<GameRecord>> {
    match (&cli.input, cli.estate) {
        (Some(path), _) => GameRecord::from_csv(path),
        (None, Some(estate)) => Ok(vec![GameRecord {
            label: "game".to_string(),
            estate,
            claims: cli.claims.clone(),
        }]),
        (None, None) => Err(BankruptcyError::InvalidInput(
            "either --estate with --claims or --input is required".to_string(),
        )),
    }
}

fn run(cli: &Cli) -> Result<Vec<Report>> {
    let config = ComputeConfig {
        round_digits: cli.round_digits,
        samples: cli.samples,
        seed: cli.seed,
    };
    let run_all = cli.algorithm.eq_ignore_ascii_case("all");
    let algorithms = if run_all {
        Algorithm::ALL.to_vec()
    } else {
        vec![cli.algorithm.parse::<Algorithm>()?]
    };

    let mut reports = Vec::new();
    for game in games(cli)? {
        log::info!("{:<24}{:<16}{} claims", "computing game", game.label, game.claims.len());
        for &algorithm in &algorithms {
            let result = algorithm
                .instantiate(&config)
                .compute(game.estate, &game.claims);
            let result = match result {
                // Running everything: skip algorithms that cannot take this game
                Err(e @ (BankruptcyError::IntegerConstraintViolation(_)
                | BankruptcyError::TooManyPlayers { .. }
                | BankruptcyError::EstateTooLarge { .. }))
                    if run_all =>
                {
                    log::warn!("skipping {algorithm} for {}: {e}", game.label);
                    continue;
                }
                other => other?,
            };
            reports.push(Report {
                game: game.label.clone(),
                algorithm: algorithm.name(),
                estate: game.estate,
                claims: game.claims.clone(),
                result,
            });
        }
    }
    Ok(reports)
}

fn print_tables(reports: &[Report]) {
    for report in reports {
        let rows = Allocation::from_result(report.algorithm, &report.claims, &report.result);
        println!(
            "{} (estate {}): {} in {}s",
            report.game, report.estate, report.algorithm, report.result.elapsed_time
        );
        println!("{}", Table::new(rows).with(Style::psql().remove_horizontals()));
        println!();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let reports = match run(&cli) {
        Ok(reports) => reports,
        Err(e) => {
            eprintln!("Error computing Shapley values: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing results: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_tables(&reports);
    }
    ExitCode::SUCCESS
}
