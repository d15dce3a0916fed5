use std::cmp::PartialOrd;

/// A pair of elements sorted in increasing order.
///
/// Used as the identity of an unordered body pair: `(3, 1)` and `(1, 3)`
/// produce the same `SortedPair`, which is what makes broad-phase output
/// deduplicable with a plain sort.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SortedPair<T: PartialOrd>([T; 2]);

impl<T: PartialOrd> SortedPair<T> {
    /// Sorts two elements in increasing order into a new pair.
    pub fn new(element1: T, element2: T) -> Self {
        if element1 > element2 {
            SortedPair([element2, element1])
        } else {
            SortedPair([element1, element2])
        }
    }

    /// The smallest element of the pair.
    #[inline]
    pub fn first(&self) -> &T {
        &self.0[0]
    }

    /// The largest element of the pair.
    #[inline]
    pub fn second(&self) -> &T {
        &self.0[1]
    }

    /// Returns `true` if both elements are equal.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.0[0] == self.0[1]
    }

    /// Consumes the pair, returning its elements in increasing order.
    #[inline]
    pub fn into_inner(self) -> [T; 2] {
        self.0
    }
}

impl<T: PartialOrd + Copy> SortedPair<T> {
    /// The elements of the pair as a tuple, in increasing order.
    #[inline]
    pub fn as_tuple(&self) -> (T, T) {
        (self.0[0], self.0[1])
    }
}
