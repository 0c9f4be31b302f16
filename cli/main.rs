/// digit-recognition
///
/// Compares nearest-neighbour search against a multilayer perceptron on two
/// folds of the handwritten digit dataset (64 features + label per row).
///
/// Run with:
///   cargo run --release -- <datasetA.csv> <datasetB.csv> [config.json]
///
/// Menu:
///   1. Nearest / K-Nearest Neighbour: both folds, A to B and B to A
///   2. Multilayer Perceptron        : train on A, test on B
///   3. Exit

mod menu;
mod runs;

use std::io;
use std::process::ExitCode;

use digit_recognition::{read_dataset, DigitError, ExperimentConfig};

use menu::MenuChoice;

const USAGE: &str = "Usage: digit-recognition <training_dataset> <testing_dataset> [config.json]";

/// Positional arguments after validation.
#[derive(Debug, PartialEq, Eq)]
struct Args {
    training_path: String,
    testing_path: String,
    config_path: Option<String>,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    match args {
        [] => Err(format!("{}\nNo datasets provided.", USAGE)),
        [_] => Err(format!(
            "{}\nOnly one dataset provided. Please provide both training and testing datasets.",
            USAGE
        )),
        [training, testing, ..] if training == testing => Err(format!(
            "Training and testing datasets are the same. Please provide different datasets.\n{}",
            USAGE
        )),
        [training, testing, rest @ ..] => Ok(Args {
            training_path: training.clone(),
            testing_path: testing.clone(),
            config_path: rest.first().cloned(),
        }),
    }
}

fn load_config(path: Option<&str>) -> Result<ExperimentConfig, DigitError> {
    match path {
        Some(path) => ExperimentConfig::load_json(path),
        None => Ok(ExperimentConfig::default()),
    }
}

fn main() -> ExitCode {
    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(message) => {
            println!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    let config = match load_config(args.config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let loaded = read_dataset(&args.training_path)
        .and_then(|first| read_dataset(&args.testing_path).map(|second| (first, second)));
    let (first, second) = match loaded {
        Ok(rows) => rows,
        Err(e @ DigitError::FileNotFound(_)) => {
            eprintln!("{}. Please provide a valid file path.", e);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("Error reading dataset: {}", e);
            return ExitCode::FAILURE;
        }
    };
    println!(
        "Training and testing datasets loaded successfully ({} and {} rows).\n",
        first.len(),
        second.len()
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    loop {
        let choice = match menu::prompt_choice(&mut input, &mut out) {
            Ok(Some(choice)) => choice,
            Ok(None) => break,
            Err(e) => {
                eprintln!("Could not read menu input: {}", e);
                return ExitCode::FAILURE;
            }
        };

        let outcome = match choice {
            MenuChoice::Neighbours => runs::run_neighbours(&first, &second, &config),
            MenuChoice::Network => runs::run_network(&first, &second, &config),
            MenuChoice::Exit => break,
        };
        if let Err(e) = outcome {
            eprintln!("Run failed: {}\n", e);
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn needs_two_datasets() {
        assert!(parse_args(&strings(&[])).unwrap_err().contains("No datasets"));
        assert!(parse_args(&strings(&["a.csv"])).unwrap_err().contains("Only one dataset"));
    }

    #[test]
    fn rejects_identical_paths() {
        let err = parse_args(&strings(&["a.csv", "a.csv"])).unwrap_err();
        assert!(err.contains("are the same"));
    }

    #[test]
    fn accepts_optional_config() {
        let args = parse_args(&strings(&["a.csv", "b.csv", "run.json"])).unwrap();
        assert_eq!(
            args,
            Args {
                training_path: "a.csv".to_string(),
                testing_path: "b.csv".to_string(),
                config_path: Some("run.json".to_string()),
            }
        );
        assert_eq!(parse_args(&strings(&["a.csv", "b.csv"])).unwrap().config_path, None);
    }

    #[test]
    fn default_config_without_path() {
        assert_eq!(load_config(None).unwrap(), ExperimentConfig::default());
    }
}
