//! # intkmeans - API documentation
//!
//! Intkmeans is a small rust library that groups integers by how close their values are to each other. It
//! is a one-dimensional adaptation of k-means clustering.
//!
//! ## Algorithm
//! A calculation starts by selecting k random samples with distinct values as the centers of k groups.
//! Each sample is then assigned to the group with the nearest center, after which every center is moved to
//! the mean of its group. This is repeated until no center moves anymore.
//!
//! The outcome of such a run heavily depends on the randomly selected initial centers. The calculation is
//! therefore repeated a configurable amount of times (50 by default), and the run with the lowest sum of
//! squared distances between samples and their centers is kept. Squared distances are used, so that samples
//! far away from their center are penalized more.
//!
//! Runs are independent of each other and are executed in parallel. Every run gets its own random seed,
//! drawn up front from the configured random number generator, so a seeded generator leads to the exact
//! same result, no matter how the runs were scheduled.
//!
//! ## Supported primitive types
//! All built-in integer types, see [`Primitive`].
//!
//! ## Example
//! ```rust
//! use intkmeans::*;
//!
//! fn main() {
//!     let samples = vec![1, 2, 3, 7, 8, 9, 17, 18, 19];
//!
//!     let conf = ClusterConfig::build().seed(1337).build();
//!     let clusterer = Clusterer::new(samples);
//!     let result = clusterer.cluster(3, &conf).unwrap();
//!
//!     println!("Groups: {:?}", result.groups());
//!     println!("Centers: {:?}", result.centers());
//!     println!("Error: {}", result.error());
//!     print!("{}", result.visualize());
//! }
//! ```
//!
//! ## Example (using the status event callback)
//! ```rust
//! use intkmeans::*;
//!
//! fn main() {
//!     let samples: Vec<u32> = (0..200).map(|_| rand::random::<u32>() % 70).collect();
//!
//!     let conf = ClusterConfig::build()
//!         .iterations(20).unwrap()
//!         .trial_done(&|r: &TrialReport| println!("Trial {} - Error: {:.2} after {} passes | Best: {:.2}",
//!             r.trial, r.error, r.passes, r.best_error))
//!         .build();
//!
//!     let result = Clusterer::new(samples).cluster(5, &conf).unwrap();
//!     println!("Groups: {:?}", result.groups());
//! }
//! ```
//!
//! ## Short API-Overview / Description
//! Entry-point of the library is the [`Clusterer`] struct, which takes over the samples into its ownership.
//! Calling [`Clusterer::cluster`] does not mutate it, so multiple calculations can be done on the same
//! instance. The result of a calculation is returned as a [`Clustering`], holding the kept [`Partition`]s.
//!
//! Invalid calls are rejected with a [`GroupingError`] before any calculation is started.

#[macro_use] mod helpers;
mod primitive;
mod error;
mod partition;
mod api;
mod variants;
mod inits;
mod abort_strategy;
pub mod visualize;

pub use abort_strategy::AbortStrategy;
pub use api::{Clusterer, ClusterConfig, ClusterConfigBuilder, Clustering, TrialReport, TrialDoneCallbackFn, DEFAULT_ITERATIONS};
pub use error::{GroupingError, Result};
pub use partition::Partition;
pub use primitive::Primitive;


#[cfg(test)]
mod tests {
    use rand::prelude::*;
    use super::*;
    use crate::helpers::testing::*;

    fn random_samples<T: Primitive>(rnd: &mut StdRng, sample_cnt: usize, max: i64) -> Vec<T> {
        (0..sample_cnt).map(|_| T::from(rnd.gen_range(0..max)).unwrap()).collect()
    }

    #[test]
    fn well_separated_blocks_i32() { well_separated_blocks::<i32>(); }
    #[test]
    fn well_separated_blocks_u8() { well_separated_blocks::<u8>(); }
    #[test]
    fn well_separated_blocks_i64() { well_separated_blocks::<i64>(); }

    fn well_separated_blocks<T: Primitive>() {
        let mut rnd = StdRng::seed_from_u64(1337);
        let mut samples = Vec::new();
        let mut should = Vec::new();
        for offset in [0i64, 60, 120, 180] {
            let block: Vec<T> = random_samples::<T>(&mut rnd, 25, 10).into_iter()
                .map(|v| v + T::from(offset).unwrap())
                .collect();
            samples.extend(block.iter().cloned());
            should.push(block);
        }
        samples.shuffle(&mut rnd);

        let conf = ClusterConfig::build().random_generator(rnd).iterations(200).unwrap().build();
        let res = Clusterer::new(samples.clone()).cluster(4, &conf).unwrap();

        assert_groups_eq_as_sets(&res.groups(), &should);
        assert_covers_samples(&res.groups(), &samples);
    }

    #[test]
    fn random_input_like_demo() {
        let mut rnd = StdRng::seed_from_u64(2024);
        for _ in 0..20 {
            let sample_cnt = 5 + rnd.gen_range(0..45);
            let samples: Vec<i32> = random_samples(&mut rnd, sample_cnt, 70);
            let distinct = samples.iter().collect::<std::collections::HashSet<_>>().len();
            let k = 1 + rnd.gen_range(0..distinct);

            let conf = ClusterConfig::build().seed(rnd.gen()).build();
            let res = Clusterer::new(samples.clone()).cluster(k, &conf).unwrap();

            assert_eq!(res.groups().len(), k);
            assert_covers_samples(&res.groups(), &samples);
            let summed: f64 = res.partitions().iter().map(Partition::squared_error).sum();
            assert_approx_eq!(res.error(), summed, 1e-9);
            assert!(res.visualize().ends_with("|\n"));
        }
    }

    #[test]
    fn more_restarts_never_hurt() {
        let mut rnd = StdRng::seed_from_u64(5);
        let samples: Vec<i32> = random_samples(&mut rnd, 150, 500);
        let clusterer = Clusterer::new(samples);

        // Both configurations draw the same leading seeds, so the longer run sees a superset of trials
        let short = clusterer.cluster(8, &ClusterConfig::build().seed(99).iterations(5).unwrap().build()).unwrap();
        let long = clusterer.cluster(8, &ClusterConfig::build().seed(99).iterations(50).unwrap().build()).unwrap();
        assert!(long.error() <= short.error());
    }

    #[test]
    fn capped_trials_still_cover_samples() {
        let mut rnd = StdRng::seed_from_u64(8);
        let samples: Vec<i16> = random_samples(&mut rnd, 400, 1000);
        let conf = ClusterConfig::build()
            .seed(3)
            .abort_strategy(AbortStrategy::CentersUnchangedOrPassLimit { max_passes: 2 }).unwrap()
            .build();
        let res = Clusterer::new(samples.clone()).cluster(10, &conf).unwrap();

        assert_eq!(res.groups().len(), 10);
        assert_covers_samples(&res.groups(), &samples);
    }
}
