use std::cmp::Ordering::{self, Equal, Greater, Less};

/// Approximate-comparison helpers, generalized from the teacher's `f32`
/// versions to the `f64` costs this engine deals in.
pub trait ApproxEq {
    fn approx_eq(&self, other: &Self) -> bool;
}

pub trait ApproxCmp {
    fn approx_partial_cmp(&self, other: &Self) -> Option<Ordering>;
    fn approx_cmp(&self, other: &Self) -> Ordering;
}

impl ApproxEq for f64 {
    fn approx_eq(&self, other: &f64) -> bool {
        (self - other).abs() <= std::f64::EPSILON
    }
}

impl ApproxCmp for f64 {
    fn approx_partial_cmp(&self, other: &f64) -> Option<Ordering> {
        match (self < other, self > other, self.approx_eq(other)) {
            (false, false, false) => None,
            (false, true, false) => Some(Greater),
            (true, false, false) => Some(Less),
            (true, true, false) | (_, _, true) => Some(Equal),
        }
    }

    fn approx_cmp(&self, other: &f64) -> Ordering {
        self.approx_partial_cmp(other)
            .unwrap_or_else(|| panic!("no f64-comparison for {} and {} possible", self, other))
    }
}

/// Total-order wrapper over `f64` for use as a `BinaryHeap`/`Ord` key.
///
/// Costs are assumed finite (the graph's weights are finite non-negative
/// reals, an invariant of the graph, not re-checked here); two costs that
/// compare unordered (e.g. either is `NaN`) will panic via [`ApproxCmp`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct OrdCost(pub f64);

impl Eq for OrdCost {}

impl PartialOrd for OrdCost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrdCost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.approx_cmp(&other.0)
    }
}
