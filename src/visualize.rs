//! Console rendering of a grouping.
//!
//! This only gives a visual idea of a result: every integer between the smallest and the largest grouped value
//! is printed on one line, values that do not occur are shown as `.` and each group is enclosed by `|` markers.
//!
//! ```text
//! | 1 2 3 | . . . | 7 8 9 |
//! ```

use crate::primitive::*;
use std::{collections::BTreeSet, fmt::Write};

/// Render **groups** into a single, newline-terminated line. The groups are sorted on copies, the passed
/// groups are left untouched. Empty groups have no boundaries and are skipped.
pub fn render<T: Primitive>(groups: &[Vec<T>]) -> String {
    let mut limits = BTreeSet::new();
    let mut values = BTreeSet::new();
    for group in groups.iter().filter(|g| !g.is_empty()) {
        let mut sorted = group.clone();
        sorted.sort_unstable();
        limits.insert(sorted[0]);
        if let Some(end) = sorted[sorted.len() - 1].checked_add(&T::one()) {
            limits.insert(end);
        }
        values.extend(sorted);
    }

    let mut out = String::new();
    if let (Some(&first), Some(&last)) = (values.first(), values.last()) {
        let mut i = first;
        loop {
            if limits.contains(&i) {
                out.push_str("| ");
            }
            if values.contains(&i) {
                let _ = write!(out, "{} ", i);
            } else {
                out.push_str(". ");
            }
            match i.checked_add(&T::one()) {
                Some(next) if next <= last => i = next,
                _ => break,
            }
        }
    }
    out.push_str("|\n");
    out
}
