use crate::{
    error::{GroupingError, Result},
    primitive::*,
    variants::{Lloyd, Trial},
    AbortStrategy, Partition,
};
use log::debug;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::{cell::RefCell, collections::HashSet};

pub type TrialDoneCallbackFn<'a> = &'a dyn Fn(&TrialReport);

/// Default amount of randomized restarts.
pub const DEFAULT_ITERATIONS: usize = 50;

/// Status information about one finished trial, as passed to the `trial_done` callback.
///
/// ## Fields
/// - **trial**: Index of the trial (0-based, in seed order)
/// - **error**: Total squared error of this trial
/// - **passes**: Amount of assign/recompute passes this trial took
/// - **converged**: Whether the trial stopped because its centers stopped moving
/// - **best_error**: Lowest error of all trials so far, including this one
/// - **improved**: Whether this trial replaced the best result
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrialReport {
    pub trial: usize,
    pub error: f64,
    pub passes: usize,
    pub converged: bool,
    pub best_error: f64,
    pub improved: bool,
}

/// This is a structure holding the configuration options for a grouping calculation, such as the amount of
/// randomized restarts, the random number generator to use, or a callback that can be set to get status
/// information from a running calculation.
///
/// For a more detailed information about all possible options, have a look at [`ClusterConfigBuilder`].
pub struct ClusterConfig<'a> {
    /// Amount of randomized restarts (trials), at least 1
    pub(crate) iterations: usize,
    /// Callback that is called after each trial, in trial order
    pub(crate) trial_done: TrialDoneCallbackFn<'a>,
    /// Random number generator, used to draw one seed per trial
    pub(crate) rnd: Box<RefCell<dyn RngCore>>,
    /// The abort-strategy for each trial's Lloyd loop
    pub(crate) abort_strategy: AbortStrategy,
    /// Whether trials are run on rayon's thread pool
    pub(crate) parallel: bool,
}
impl<'a> Default for ClusterConfig<'a> {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            trial_done: &|_| {},
            rnd: Box::new(RefCell::new(rand::thread_rng())),
            abort_strategy: AbortStrategy::default(),
            parallel: true,
        }
    }
}
impl<'a> ClusterConfig<'a> {
    /// Use the [`ClusterConfigBuilder`] to build a [`ClusterConfig`] instance.
    pub fn build() -> ClusterConfigBuilder<'a> {
        ClusterConfigBuilder { config: ClusterConfig::default() }
    }
    pub fn iterations(&self) -> usize { self.iterations }
    pub fn abort_strategy(&self) -> AbortStrategy { self.abort_strategy }
    pub fn parallel(&self) -> bool { self.parallel }
}
impl<'a> std::fmt::Debug for ClusterConfig<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClusterConfig")
            .field("iterations", &self.iterations)
            .field("abort_strategy", &self.abort_strategy)
            .field("parallel", &self.parallel)
            .finish_non_exhaustive()
    }
}

pub struct ClusterConfigBuilder<'a> {
    config: ClusterConfig<'a>
}
impl<'a> ClusterConfigBuilder<'a> {
    /// Set the amount of randomized restarts. The best of all restarts is kept.
    /// ## Errors
    /// [`GroupingError::InvalidConfiguration`] if **iterations** is 0
    pub fn iterations(mut self, iterations: usize) -> Result<Self> {
        if iterations < 1 {
            return Err(GroupingError::InvalidConfiguration { parameter: "iterations", value: iterations });
        }
        self.config.iterations = iterations;
        Ok(self)
    }
    /// Set the callback that should be called after each finished trial.
    pub fn trial_done(mut self, trial_done: TrialDoneCallbackFn<'a>) -> Self {
        self.config.trial_done = trial_done; self
    }
    /// Set the random number generator that should be used in the calculation.
    /// Use a seeded generator for deterministically repeatable results.
    pub fn random_generator<R: RngCore + 'static>(mut self, rnd: R) -> Self {
        self.config.rnd = Box::new(RefCell::new(rnd)); self
    }
    /// Shorthand for [`ClusterConfigBuilder::random_generator`] with a [`ChaCha8Rng`] seeded from **seed**.
    pub fn seed(self, seed: u64) -> Self {
        self.random_generator(ChaCha8Rng::seed_from_u64(seed))
    }
    /// Set the abort-strategy of each trial. For more information, see documentation of [`AbortStrategy`].
    /// ## Default
    /// [`AbortStrategy::CentersUnchanged`]
    /// ## Errors
    /// [`GroupingError::InvalidConfiguration`] if a pass limit of 0 is requested
    pub fn abort_strategy(mut self, abort_strategy: AbortStrategy) -> Result<Self> {
        if let AbortStrategy::CentersUnchangedOrPassLimit { max_passes: 0 } = abort_strategy {
            return Err(GroupingError::InvalidConfiguration { parameter: "max_passes", value: 0 });
        }
        self.config.abort_strategy = abort_strategy;
        Ok(self)
    }
    /// Run trials concurrently on rayon's thread pool (default), or one after the other.
    /// The result is the same either way.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel; self
    }
    /// Return the internally built configuration structure.
    pub fn build(self) -> ClusterConfig<'a> { self.config }
}


/// The best grouping found by a calculation. This is an immutable snapshot, it never aliases the working
/// state of a trial.
///
/// ## Fields
/// - **k**: The amount of groups that were requested
/// - **error**: Total squared error of the kept partitions
/// - **partitions**: The kept partitions, in creation order
/// - **trials**: Amount of trials that ran (0 when every value got its own group)
/// - **best_trial**: Index of the trial the partitions stem from
#[derive(Clone, Debug, PartialEq)]
pub struct Clustering<T: Primitive> {
    pub(crate) k: usize,
    pub(crate) error: f64,
    pub(crate) partitions: Vec<Partition<T>>,
    pub(crate) trials: usize,
    pub(crate) best_trial: Option<usize>,
}
impl<T: Primitive> Clustering<T> {
    pub fn k(&self) -> usize { self.k }
    pub fn error(&self) -> f64 { self.error }
    pub fn partitions(&self) -> &[Partition<T>] { &self.partitions }
    pub fn trials(&self) -> usize { self.trials }
    pub fn best_trial(&self) -> Option<usize> { self.best_trial }
    pub fn centers(&self) -> Vec<f64> {
        self.partitions.iter().map(Partition::center).collect()
    }

    /// The groups as plain integer vectors, in creation order. Each group's members are in assignment order.
    pub fn groups(&self) -> Vec<Vec<T>> {
        self.partitions.iter().map(|p| p.members().to_vec()).collect()
    }

    pub fn into_groups(self) -> Vec<Vec<T>> {
        self.partitions.into_iter().map(Partition::into_members).collect()
    }

    /// Render the groups as a single line of text. See [`crate::visualize::render`].
    pub fn visualize(&self) -> String {
        crate::visualize::render(&self.groups())
    }
}


/// Entrypoint of this crate's API-Surface.
///
/// Create an instance of this struct, giving the integers you want to group. The instance is never mutated by
/// a calculation, so it can be reused for differing group counts or configurations.
pub struct Clusterer<T: Primitive> {
    pub(crate) samples: Vec<T>
}
impl<T: Primitive> Clusterer<T> {
    /// Create a new instance of the [`Clusterer`] structure.
    ///
    /// ## Arguments
    /// - **samples**: The integers to group (duplicates are allowed)
    pub fn new(samples: Vec<T>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[T] { &self.samples }

    fn validate(&self, k: usize) -> Result<()> {
        if self.samples.is_empty() {
            return Err(GroupingError::EmptyInput);
        }
        if k == 0 {
            return Err(GroupingError::InvalidConfiguration { parameter: "k", value: k });
        }
        if self.samples.len() < k {
            return Err(GroupingError::TooFewElements { len: self.samples.len(), k });
        }
        let distinct = self.samples.iter().collect::<HashSet<_>>().len();
        if distinct < k {
            return Err(GroupingError::TooFewDistinctValues { distinct, k });
        }
        Ok(())
    }

    /// Group the samples into **k** groups of values that are close to each other.
    ///
    /// Runs `iterations` independent trials of Lloyd's algorithm, each starting from **k** randomly selected
    /// samples with distinct values, and keeps the trial with the lowest total squared error. On a tie, the
    /// earlier trial is kept. When there are exactly **k** samples, every sample gets its own group (in input
    /// order) and no trial is run.
    ///
    /// ## Arguments
    /// - **k**: Amount of groups to build
    /// - **config**: [`ClusterConfig`] instance, containing several configuration options for the calculation.
    ///
    /// ## Errors
    /// - [`GroupingError::EmptyInput`] if there are no samples
    /// - [`GroupingError::InvalidConfiguration`] if **k** is 0
    /// - [`GroupingError::TooFewElements`] if there are less than **k** samples
    /// - [`GroupingError::TooFewDistinctValues`] if there are less than **k** distinct sample values
    ///
    /// ## Example
    /// ```rust
    /// use intkmeans::*;
    ///
    /// let clusterer = Clusterer::new(vec![1, 2, 3, 7, 8, 9, 17, 18, 19]);
    /// let conf = ClusterConfig::build().seed(1337).build();
    /// let result = clusterer.cluster(3, &conf).unwrap();
    ///
    /// assert_eq!(result.groups().len(), 3);
    /// println!("Groups: {:?}", result.groups());
    /// println!("Error: {}", result.error());
    /// ```
    pub fn cluster(&self, k: usize, config: &ClusterConfig<'_>) -> Result<Clustering<T>> {
        self.validate(k)?;
        debug!("grouping {} values into {} groups ({} trials, parallel: {})",
            self.samples.len(), k, config.iterations, config.parallel);

        if self.samples.len() == k {
            debug!("every value gets its own group");
            return Ok(Clustering {
                k,
                error: 0.0,
                partitions: self.samples.iter().cloned().map(Partition::singleton).collect(),
                trials: 0,
                best_trial: None,
            });
        }

        // Seeds are drawn up front and in order, so scheduling can not influence the result
        let seeds: Vec<u64> = {
            let mut rnd = config.rnd.borrow_mut();
            (0..config.iterations).map(|_| rnd.next_u64()).collect()
        };
        let samples = &self.samples;
        let abort_strategy = &config.abort_strategy;
        let run_trial = |(trial_id, seed): (usize, &u64)| {
            let mut rnd = ChaCha8Rng::seed_from_u64(*seed);
            let partitions = crate::inits::randomsample::calculate(samples, k, &mut rnd);
            Lloyd::calculate(samples, partitions, abort_strategy, trial_id)
        };
        let trials: Vec<Trial<T>> = if config.parallel {
            seeds.par_iter().enumerate().map(run_trial).collect()
        } else {
            seeds.iter().enumerate().map(run_trial).collect()
        };

        let mut best: Option<(usize, Trial<T>)> = None;
        let mut best_error = f64::INFINITY;
        for (trial_id, trial) in trials.into_iter().enumerate() {
            let improved = best.is_none() || trial.error < best_error;
            if improved {
                debug!("trial {}: error improved {} -> {}", trial_id, best_error, trial.error);
                best_error = trial.error;
            }
            (config.trial_done)(&TrialReport {
                trial: trial_id,
                error: trial.error,
                passes: trial.passes,
                converged: trial.converged,
                best_error,
                improved,
            });
            if improved {
                best = Some((trial_id, trial));
            }
        }

        let trials = config.iterations;
        let (best_trial, trial) = best
            .ok_or(GroupingError::InvalidConfiguration { parameter: "iterations", value: trials })?;
        debug!("kept trial {} of {} with error {}", best_trial, trials, trial.error);
        Ok(Clustering { k, error: trial.error, partitions: trial.partitions, trials, best_trial: Some(best_trial) })
    }
}
