use crate::primitive::*;

/// One group of integers, together with its representative center.
///
/// Members are kept in the order in which they were assigned, they are never sorted. Cloning a partition
/// yields an independent deep copy, which is how the best result of a calculation is snapshotted.
///
/// ## Fields
/// - **center**: Mean of the members after the last recomputation (or the initial center value)
/// - **members**: Integers currently assigned to this partition
#[derive(Clone, Debug, PartialEq)]
pub struct Partition<T: Primitive> {
    pub(crate) center: f64,
    pub(crate) members: Vec<T>,
}
impl<T: Primitive> Partition<T> {
    pub(crate) fn new() -> Self {
        Self { center: 0.0, members: Vec::new() }
    }

    /// Partition holding exactly one value, centered on it.
    pub(crate) fn singleton(value: T) -> Self {
        Self { center: value.to_center(), members: vec![value] }
    }

    pub fn center(&self) -> f64 { self.center }
    pub fn members(&self) -> &[T] { &self.members }
    pub fn len(&self) -> usize { self.members.len() }
    pub fn is_empty(&self) -> bool { self.members.is_empty() }
    pub fn into_members(self) -> Vec<T> { self.members }

    /// Set the center to a literal value. Only used when a trial is initialized.
    pub(crate) fn set_center(&mut self, value: T) {
        self.center = value.to_center();
    }

    pub(crate) fn add(&mut self, value: T) {
        self.members.push(value);
    }

    /// Remove all members, the center is kept.
    pub(crate) fn clear(&mut self) {
        self.members.clear();
    }

    /// Move the center to the mean of the current members.
    /// An empty partition keeps its previous center instead of collapsing towards zero.
    pub(crate) fn recompute_center(&mut self) {
        if self.members.is_empty() {
            return;
        }
        let sum: f64 = self.members.iter().map(|m| m.to_center()).sum();
        self.center = sum / self.members.len() as f64;
    }

    /// Sum of the squared distances of all members to the center (0 for an empty partition).
    /// Squaring penalizes members far away from the center more than the plain distance would.
    pub fn squared_error(&self) -> f64 {
        self.members.iter()
            .map(|m| m.to_center() - self.center)
            .map(|d| d * d)
            .sum()
    }
}
