use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use digit_recognition::{
    two_fold, ClassificationReport, DataSet, EpochStats, ExperimentConfig,
    NeighbourClassifier, Network, Result,
};

// ---------------------------------------------------------------------------
// Menu option 1: neighbour search
// ---------------------------------------------------------------------------

/// Runs 1-NN and k-NN in both directions between the two datasets.
pub fn run_neighbours(first: &[Vec<i32>], second: &[Vec<i32>], config: &ExperimentConfig) -> Result<()> {
    let classifiers = [
        NeighbourClassifier::Nearest,
        NeighbourClassifier::KNearest { k: config.k },
    ];

    for classifier in classifiers {
        println!("\n{} ({:?} distance)", classifier.name(), config.metric);
        println!("{}", "─".repeat(48));

        let t_start = Instant::now();
        let report = two_fold(classifier, first, second, config.metric)?;

        println!("Fold 1 (train A, test B):");
        print_report(&report.first_to_second);
        println!("Fold 2 (train B, test A):");
        print_report(&report.second_to_first);
        println!(
            "Two-fold mean accuracy: {:.4}  ({:.1}s)\n",
            report.mean_accuracy(),
            t_start.elapsed().as_secs_f64()
        );
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Menu option 2: multilayer perceptron
// ---------------------------------------------------------------------------

/// Trains a fresh network on `training_rows` and evaluates it on `testing_rows`.
///
/// Training runs on a worker thread that owns the network; epoch statistics
/// come back over a channel and are printed as they arrive.
pub fn run_network(training_rows: &[Vec<i32>], testing_rows: &[Vec<i32>], config: &ExperimentConfig) -> Result<()> {
    println!("Creating training set...");
    let training = DataSet::from_rows(training_rows, config.n_classes)?;
    let testing = DataSet::from_rows(testing_rows, config.n_classes)?;

    let mut rng = config.rng();
    let network = Network::new(config.topology.clone(), &config.init, &mut rng)?;

    let hp = &config.hyperparams;
    println!("\nNetwork architecture: {:?} (sigmoid)", config.topology.sizes());
    println!(
        "Training for {} epochs × {} batches of {} samples, lr = {}",
        hp.epochs, hp.loops_per_epoch, hp.batch_size, hp.learning_rate
    );

    let (tx, rx) = mpsc::channel::<EpochStats>();
    let train_config = hp.to_train_config().with_progress(tx);

    let t_start = Instant::now();
    let worker = thread::spawn(move || {
        let mut network = network;
        let result = network.train(&training, &train_config, &mut rng);
        result.map(|summary| (network, summary))
    });

    for stats in rx {
        print_epoch(&stats);
    }

    let (mut network, summary) = worker
        .join()
        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))?;

    println!(
        "Training neural network complete after {} epochs ({:.1}s).\n",
        summary.epochs.len(),
        t_start.elapsed().as_secs_f64()
    );

    println!("Testing neural network...");
    let report = network.evaluate(&testing)?;
    print_report(&report);
    Ok(())
}

fn print_epoch(stats: &EpochStats) {
    println!(
        "Epoch {:>4}/{}  MSE: {:>10.6}  Train Acc: {:>6.2}%  ({} ms)",
        stats.epoch,
        stats.total_epochs,
        stats.train_loss,
        stats.train_accuracy * 100.0,
        stats.elapsed_ms
    );
}

fn print_report(report: &ClassificationReport) {
    println!("{}\n", report);
}
