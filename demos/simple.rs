use bankruptcy_shapley::{Algorithm, ComputeConfig, error::Result};

fn main() -> Result<()> {
    let estate = 200.0;
    let claims = [100.0, 200.0, 300.0];
    let config = ComputeConfig {
        seed: Some(42),
        ..ComputeConfig::default()
    };

    println!("Estate {estate}, claims {claims:?}");
    println!("{:>20}  {:>10}  {:>10}  {:>10}  {:>10}", "Algorithm", "P0", "P1", "P2", "Seconds");
    for algorithm in Algorithm::ALL {
        let result = algorithm.instantiate(&config).compute(estate, &claims)?;
        println!(
            "{:>20}  {:>10}  {:>10}  {:>10}  {:>10}",
            algorithm.name(),
            result.value[0],
            result.value[1],
            result.value[2],
            result.elapsed_time
        );
    }

    Ok(())
}
