#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;

use acotsp_cli::core::prelude::*;
use acotsp_cli::extensions::solve::ConsoleSink;
use acotsp_cli::extensions::solve::config::{Config, create_aco_config, read_config};
use acotsp_cli::scientific::tsplib::{TsplibProblem, TsplibTour};
use clap::{Arg, ArgAction, Command};
use std::io::{BufReader, BufWriter};
use std::sync::Arc;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const CONFIG_ARG_NAME: &str = "config";
const ANTS_ARG_NAME: &str = "ants";
const RHO_ARG_NAME: &str = "rho";
const ALPHA_ARG_NAME: &str = "alpha";
const BETA_ARG_NAME: &str = "beta";
const TRIALS_ARG_NAME: &str = "trials";
const ITERATIONS_ARG_NAME: &str = "iterations";
const THREADS_ARG_NAME: &str = "threads";
const LS_PERCENTAGE_ARG_NAME: &str = "ls-percentage";
const K_BACKUP_ARG_NAME: &str = "k-backup";
const K_PAD_ARG_NAME: &str = "k-pad";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const DEPOSIT_ARG_NAME: &str = "deposit";
const OUT_TOUR_ARG_NAME: &str = "out-tour";
const LOG_ARG_NAME: &str = "log";

/// Creates the solve command with all its arguments.
pub fn get_solve_app() -> Command {
    Command::new("acotsp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Solves the Traveling Salesman Problem using a parallel ant colony")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file in TSPLIB95 format").required(true).index(1))
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file, arguments override its values")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ANTS_ARG_NAME)
                .help("Specifies amount of ants per iteration")
                .short('m')
                .long(ANTS_ARG_NAME)
                .required(false),
        )
        .arg(Arg::new(RHO_ARG_NAME).help("Specifies evaporation rate in [0, 1]").long(RHO_ARG_NAME).required(false))
        .arg(Arg::new(ALPHA_ARG_NAME).help("Specifies pheromone influence").long(ALPHA_ARG_NAME).required(false))
        .arg(Arg::new(BETA_ARG_NAME).help("Specifies heuristic influence").long(BETA_ARG_NAME).required(false))
        .arg(
            Arg::new(TRIALS_ARG_NAME)
                .help("Specifies amount of independent trials")
                .short('t')
                .long(TRIALS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ITERATIONS_ARG_NAME)
                .help("Specifies amount of iterations per trial")
                .short('n')
                .long(ITERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(THREADS_ARG_NAME)
                .help("Specifies amount of worker threads, default is amount of cpus")
                .long(THREADS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LS_PERCENTAGE_ARG_NAME)
                .help("Specifies share of the shortest tours refined by 2-opt local search, zero disables it")
                .long(LS_PERCENTAGE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(K_BACKUP_ARG_NAME)
                .help("Specifies amount of nearest neighbours in candidate lists")
                .long(K_BACKUP_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(K_PAD_ARG_NAME)
                .help("Specifies amount of cache lines inserted between workers' memory")
                .long(K_PAD_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies randomization seed to avoid stochastic behavior")
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(DEPOSIT_ARG_NAME)
                .help("Specifies which tours deposit pheromone")
                .long(DEPOSIT_ARG_NAME)
                .value_parser(["all", "iteration-best", "trial-best"])
                .required(false),
        )
        .arg(
            Arg::new(OUT_TOUR_ARG_NAME)
                .help("Specifies path to file for the best tour in TSPLIB95 format")
                .short('o')
                .long(OUT_TOUR_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
}

/// Runs solve command, summary and log messages are passed to the logger.
pub fn run_solve(matches: &ArgMatches, logger: InfoLogger) -> Result<(), String> {
    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem file is not specified")?;

    let file_config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?))?,
        None => Config::default(),
    };
    let config = create_aco_config(&file_config.merge(get_config_from_args(matches)?))?;

    let instance = BufReader::new(open_file(problem_path, "problem")?)
        .read_tsplib()
        .map_err(|err| format!("cannot read problem from '{problem_path}': '{err}'"))?;
    let name = if instance.name.is_empty() { "tour".to_string() } else { instance.name.clone() };

    let k_backup = config.candidates_size(instance.size());
    let problem = Arc::new(instance.into_problem(k_backup).map_err(|err| format!("cannot create problem: '{err}'"))?);

    let telemetry = if matches.get_flag(LOG_ARG_NAME) {
        TelemetryMode::OnlyLogging { logger: logger.clone(), log_best: config.log_best }
    } else {
        TelemetryMode::None
    };
    let environment = Arc::new(Environment::new(config.seed, config.threads, logger.clone()));

    let result = Solver::new(problem, config, environment)
        .with_sink(Box::new(ConsoleSink::new(logger)))
        .with_telemetry(telemetry)
        .solve()
        .map_err(|err| format!("cannot solve problem: '{err}'"))?;

    if let Some(path) = matches.get_one::<String>(OUT_TOUR_ARG_NAME) {
        let writer = BufWriter::new(create_file(path, "out tour")?);
        (format!("{name}.tour").as_str(), &result.best)
            .write_tsplib(writer)
            .map_err(|err| format!("cannot write tour: '{err}'"))?;
    }

    Ok(())
}

fn get_config_from_args(matches: &ArgMatches) -> Result<Config, String> {
    Ok(Config {
        ants: parse_value(matches, ANTS_ARG_NAME, "ants")?,
        rho: parse_value(matches, RHO_ARG_NAME, "rho")?,
        alpha: parse_value(matches, ALPHA_ARG_NAME, "alpha")?,
        beta: parse_value(matches, BETA_ARG_NAME, "beta")?,
        max_trials: parse_value(matches, TRIALS_ARG_NAME, "trials")?,
        max_iterations: parse_value(matches, ITERATIONS_ARG_NAME, "iterations")?,
        threads: parse_value(matches, THREADS_ARG_NAME, "threads")?,
        ls_percentage: parse_value(matches, LS_PERCENTAGE_ARG_NAME, "local search percentage")?,
        k_backup: parse_value(matches, K_BACKUP_ARG_NAME, "k backup")?,
        k_pad: parse_value(matches, K_PAD_ARG_NAME, "k pad")?,
        seed: parse_value(matches, RANDOM_SEED_ARG_NAME, "seed")?,
        deposit: matches.get_one::<String>(DEPOSIT_ARG_NAME).cloned(),
        ..Config::default()
    })
}
