use crate::{primitive::*, AbortStrategy, Partition};
use log::{trace, warn};

/// Result of one trial, as handed back to the reduction in [`crate::Clusterer::cluster`].
///
/// ## Fields
/// - **partitions**: The trial's partitions after its last pass, in creation order
/// - **error**: Sum of all partitions' squared errors
/// - **passes**: Amount of assign/recompute passes the trial took
/// - **converged**: Whether the last pass left every center unchanged
#[derive(Clone, Debug)]
pub(crate) struct Trial<T: Primitive> {
    pub(crate) partitions: Vec<Partition<T>>,
    pub(crate) error: f64,
    pub(crate) passes: usize,
    pub(crate) converged: bool,
}

pub(crate) struct Lloyd<T: Primitive> {
	_p: std::marker::PhantomData<T>
}
impl<T: Primitive> Lloyd<T> {
    /// Route every sample, in input order, into the partition with the nearest center.
    /// Partitions are scanned by index and only a strictly smaller distance wins, so ties go to the lower index.
    fn assign_samples(samples: &[T], partitions: &mut [Partition<T>]) {
        samples.iter().cloned().for_each(|sample| {
            let value = sample.to_center();
            let mut best_idx = 0;
            let mut best_dist = f64::MAX;
            for (idx, partition) in partitions.iter().enumerate() {
                let dist = (value - partition.center).abs();
                if dist < best_dist {
                    best_dist = dist;
                    best_idx = idx;
                }
            }
            partitions[best_idx].add(sample);
        });
    }

    /// One pass: reassign all samples and move the centers onto their new means.
    /// ## Returns
    /// Summed absolute movement of all centers
    fn update_partitions(samples: &[T], partitions: &mut [Partition<T>]) -> f64 {
        let previous_centers: Vec<f64> = partitions.iter().map(|p| p.center).collect();
        partitions.iter_mut().for_each(Partition::clear);
        Self::assign_samples(samples, partitions);
        partitions.iter_mut().for_each(Partition::recompute_center);

        previous_centers.iter()
            .zip(partitions.iter())
            .map(|(prev, p)| (prev - p.center).abs())
            .sum()
    }

    /// Run Lloyd's algorithm on already initialized **partitions**, until the abort strategy stops it.
    #[inline(always)] pub(crate) fn calculate(
        samples: &[T], mut partitions: Vec<Partition<T>>, abort_strategy: &AbortStrategy, trial_id: usize,
    ) -> Trial<T> {
        let mut abort_strategy = abort_strategy.create_logic();
        let mut passes = 0;

        let converged = loop {
            let movement = Self::update_partitions(samples, &mut partitions);
            passes += 1;
            trace!("trial {}: pass {} moved centers by {}", trial_id, passes, movement);
            if !abort_strategy.next(movement) {
                break movement == 0.0;
            }
        };
        if !converged {
            warn!("trial {}: stopped after {} passes without converging", trial_id, passes);
        }

        let error = partitions.iter().map(Partition::squared_error).sum();
        Trial { partitions, error, passes, converged }
    }
}
