use crate::{primitive::*, Partition};
use rand::prelude::*;

/// Create **k** fresh partitions, whose centers are randomly selected samples with pairwise distinct values.
///
/// Samples are drawn uniformly by position. A draw whose value equals an already chosen center is rejected
/// and repeated, so duplicated values are more likely to be picked but never picked twice.
/// The caller guarantees that **samples** contains at least **k** distinct values.
#[inline(always)] pub fn calculate<T, R>(samples: &[T], k: usize, rnd: &mut R) -> Vec<Partition<T>>
				where T: Primitive, R: Rng + ?Sized {
	let mut centers: Vec<T> = Vec::with_capacity(k);
	while centers.len() < k {
		let candidate = samples[rnd.gen_range(0..samples.len())];
		if !centers.contains(&candidate) {
			centers.push(candidate);
		}
	}
	centers.into_iter()
		.map(|c| {
			let mut partition = Partition::new();
			partition.set_center(c);
			partition
		})
		.collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_are_distinct_input_values() {
        let samples = vec![5, 5, 5, 5, 5, 5, 1, 9, 9, 3];
        let mut rnd = StdRng::seed_from_u64(1337);
        for _ in 0..100 {
            let partitions = calculate(&samples, 4, &mut rnd);
            let mut centers: Vec<f64> = partitions.iter().map(|p| p.center()).collect();
            assert!(partitions.iter().all(|p| p.is_empty()));
            centers.sort_by(|a, b| a.partial_cmp(b).unwrap());
            assert_eq!(centers, vec![1.0, 3.0, 5.0, 9.0]);
        }
    }

    #[test]
    fn same_seed_same_centers() {
        let samples: Vec<u32> = (0..100).collect();
        let a = calculate(&samples, 10, &mut StdRng::seed_from_u64(7));
        let b = calculate(&samples, 10, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }
}
