use intkmeans::*;
use rand::prelude::*;
use std::collections::HashSet;

fn main() -> Result<()> {
    let mut rnd = thread_rng();

    // Generate some random data
    let sample_cnt = 5 + rnd.gen_range(0..45);
    let samples: Vec<i32> = (0..sample_cnt).map(|_| rnd.gen_range(0..70)).collect();
    let distinct = samples.iter().collect::<HashSet<_>>().len();
    let k = 1 + rnd.gen_range(0..distinct);

    let result = Clusterer::new(samples).cluster(k, &ClusterConfig::default())?;

    println!("Groups: {:?} k: {}\n", result.groups(), k);
    print!("{}", result.visualize());
    Ok(())
}
