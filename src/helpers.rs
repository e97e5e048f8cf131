#[cfg(test)]
macro_rules! assert_approx_eq {
	($left: expr, $right: expr, $tol: expr) => ({
		match ($left, $right, $tol) {
			(left_val , right_val, tol_val) => {
				let delta = (left_val - right_val).abs();
				if !(delta < tol_val) {
					panic!(
						"assertion failed: `(left ≈ right)` \
						(left: `{}`, right: `{}`) \
						with ∆={:1.1e} (allowed ∆={:e})",
						left_val , right_val, delta, tol_val
					)
				}
			}
		}
	});
	($left: expr, $right: expr) => (assert_approx_eq!(($left), ($right), 1e-15))
}

#[cfg(test)]
pub(crate) mod testing {
	use std::collections::HashMap;

	use crate::Primitive;

	fn sorted<T: Primitive>(values: &[T]) -> Vec<T> {
		let mut values = values.to_vec();
		values.sort_unstable();
		values
	}

	/// Compare two groupings, ignoring the order of the groups among themselves and the order within each group.
	pub fn assert_groups_eq_as_sets<T: Primitive>(actual: &[Vec<T>], should: &[Vec<T>]) {
		let mut actual_sorted: Vec<Vec<T>> = actual.iter().map(|g| sorted(g)).collect();
		let mut should_sorted: Vec<Vec<T>> = should.iter().map(|g| sorted(g)).collect();
		actual_sorted.sort();
		should_sorted.sort();
		if actual_sorted != should_sorted {
			panic!("Groupings differ.\nActual: {:?}\nShould: {:?}", actual, should);
		}
	}

	/// Every sample has to be in exactly one group, with its multiplicity preserved.
	pub fn assert_covers_samples<T: Primitive>(groups: &[Vec<T>], samples: &[T]) {
		let mut counts: HashMap<T, isize> = HashMap::new();
		samples.iter().for_each(|&s| *counts.entry(s).or_default() += 1);
		groups.iter().flatten().for_each(|&m| *counts.entry(m).or_default() -= 1);
		if let Some((value, diff)) = counts.iter().find(|(_, &diff)| diff != 0) {
			panic!("Value {} is off by {} between samples and groups.\nGroups: {:?}", value, diff, groups);
		}
	}
}


#[cfg(test)]
mod tests {
	use super::testing::*;

	#[test]
	fn groups_as_sets() {
		assert_groups_eq_as_sets(&[vec![3, 1], vec![9, 7]], &[vec![7, 9], vec![1, 3]]);
		assert_covers_samples(&[vec![3, 1, 1], vec![9]], &[1, 9, 1, 3]);
	}

	#[test]
	#[should_panic]
	fn groups_as_sets_mismatch() {
		assert_groups_eq_as_sets(&[vec![1, 2], vec![3]], &[vec![1], vec![2, 3]]);
	}

	#[test]
	#[should_panic]
	fn coverage_detects_missing_duplicate() {
		assert_covers_samples(&[vec![1], vec![9]], &[1, 1, 9]);
	}
}
