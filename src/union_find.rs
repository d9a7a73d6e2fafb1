//! Disjoint-set forest used to track connected components while the maze is being carved.
//!
//! The forest is a flat, index-addressed array of representatives. Every element starts as its
//! own representative; [`DisjointSet::union`] rewrites the root of one element so that it points
//! at the root of the other.

/// Disjoint-set forest over the integers `0..len`.
///
/// This structure maps each element to a representative. Following the representative chain until
/// an element points at itself yields the canonical member (the root) of the element's set. The
/// maze builder keeps one element per cell and merges two sets whenever it opens a passage between
/// them, so two cells share a root exactly when a path already connects them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisjointSet {
    /// Representative of each element, addressed by the element itself.
    ///
    /// This field holds the identity table after construction. Each union rewrites a single entry,
    /// the one belonging to the root of the first set.
    representatives: Vec<usize>,
}

impl DisjointSet {
    /// Creates a forest of `len` singleton sets.
    ///
    /// Every element is initialized as its own representative, so no two elements share a set.
    pub fn new(len: usize) -> Self {
        Self {
            representatives: (0..len).collect(),
        }
    }

    /// Creates a forest from an explicit representative table.
    ///
    /// The element at index `i` of `representatives` is the representative of `i`. Returns `None`
    /// if any entry points outside the table, since such a forest has no well-defined roots.
    pub fn from_representatives(representatives: Vec<usize>) -> Option<Self> {
        let len = representatives.len();
        representatives
            .iter()
            .all(|&rep| rep < len)
            .then_some(Self { representatives })
    }

    /// Returns the number of elements in the forest.
    pub fn len(&self) -> usize {
        self.representatives.len()
    }

    /// Returns `true` if the forest has no elements.
    pub fn is_empty(&self) -> bool {
        self.representatives.is_empty()
    }

    /// Returns the root representative of `element`.
    ///
    /// The chain of representatives is walked iteratively until a fixed point is found. Returns
    /// `None` if `element` is not part of the forest.
    pub fn find(&self, element: usize) -> Option<usize> {
        let mut current = element;
        // A chain can never be longer than the forest itself; anything longer is a cycle.
        for _ in 0..=self.representatives.len() {
            let next = *self.representatives.get(current)?;
            if next == current {
                return Some(current);
            }
            current = next;
        }

        None
    }

    /// Merges the sets containing `first` and `second`.
    ///
    /// The root of `first` is rewritten to point at the root of `second`. No balancing by rank or
    /// size is performed. Returns `false` if either element is outside the forest or both already
    /// share a root, in which case the forest is left untouched.
    pub fn union(&mut self, first: usize, second: usize) -> bool {
        let (Some(first_root), Some(second_root)) = (self.find(first), self.find(second)) else {
            return false;
        };
        if first_root == second_root {
            return false;
        }

        match self.representatives.get_mut(first_root) {
            Some(rep) => {
                *rep = second_root;
                true
            }
            None => false,
        }
    }

    /// Returns `true` if both elements belong to the same set.
    pub fn same_set(&self, first: usize, second: usize) -> bool {
        match (self.find(first), self.find(second)) {
            (Some(first_root), Some(second_root)) => first_root == second_root,
            _ => false,
        }
    }

    /// Returns the number of distinct sets in the forest.
    pub fn set_count(&self) -> usize {
        self.representatives
            .iter()
            .enumerate()
            .filter(|&(element, &rep)| element == rep)
            .count()
    }
}
