use intkmeans::*;

fn main() -> Result<()> {
    let (sample_cnt, k, iterations) = (2000, 6, 25);

    // Generate some random data
    let samples: Vec<i64> = (0..sample_cnt).map(|_| rand::random::<i64>() % 1000).collect();

    let conf = ClusterConfig::build()
        .iterations(iterations)?
        .seed(1337)
        .trial_done(&|r: &TrialReport|
            println!("Trial {} - Error: {:.2} after {} passes | Best: {:.2}{}",
                r.trial, r.error, r.passes, r.best_error, if r.improved { " (improved)" } else { "" }))
        .build();

    let result = Clusterer::new(samples).cluster(k, &conf)?;

    println!("Centers: {:?}", result.centers());
    println!("Group sizes: {:?}", result.partitions().iter().map(Partition::len).collect::<Vec<_>>());
    println!("Error: {}", result.error());
    Ok(())
}
