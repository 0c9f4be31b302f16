use rand::rngs::StdRng;
use rand::SeedableRng;

use digit_recognition::{DataSet, InitRanges, Network, Result, Topology, TrainConfig};

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(7);
    let mut network = Network::new(Topology::new(vec![4, 3, 2])?, &InitRanges::default(), &mut rng)?;

    let dataset = DataSet::from_rows(
        &[
            vec![1, 1, 0, 0, 0],
            vec![1, 0, 0, 0, 0],
            vec![0, 0, 1, 1, 1],
            vec![0, 0, 0, 1, 1],
        ],
        2,
    )?;

    let config = TrainConfig::new(50, 20, 4, 0.5);
    let summary = network.train(&dataset, &config, &mut rng)?;
    for stats in summary.epochs.iter().filter(|s| s.epoch % 10 == 0) {
        println!("Epoch {}: loss = {:.6}", stats.epoch, stats.train_loss);
    }

    for sample in &dataset {
        let output = network.run(&sample.input)?;
        println!("Input: {:?} -> Output: [{:.4}, {:.4}]", sample.input, output[0], output[1]);
    }

    println!("{}", network.evaluate(&dataset)?);
    Ok(())
}
