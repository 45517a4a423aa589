/// A sample set sorted by value, together with the permutations needed to
/// undo the sort.
#[derive(Clone, Debug)]
pub(crate) struct SortedView {
    /// Values in non-decreasing order.
    pub(crate) values: Vec<f64>,
    /// Sample weights reordered to match `values`.
    pub(crate) weights: Vec<f64>,
    /// Sorted position -> original index.
    pub(crate) order: Vec<usize>,
    /// Original index -> sorted position (inverse of `order`).
    pub(crate) rank: Vec<usize>,
}

impl SortedView {
    /// Stable argsort of `values`, carrying `weights` along.
    ///
    /// Stability keeps duplicate values in their original relative order, so
    /// `rank` is a true inverse of `order` even with ties.
    pub(crate) fn new(values: &[f64], weights: &[f64]) -> Self {
        debug_assert_eq!(values.len(), weights.len());
        let n = values.len();

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

        let mut rank = vec![0usize; n];
        for (pos, &orig) in order.iter().enumerate() {
            rank[orig] = pos;
        }

        Self {
            values: order.iter().map(|&i| values[i]).collect(),
            weights: order.iter().map(|&i| weights[i]).collect(),
            order,
            rank,
        }
    }
}

/// Exclusive prefix sums: `out[k]` is the sum of `weights[..k]`, so the total
/// weight over a half-open range `[lo, hi)` is `out[hi] - out[lo]`.
pub(crate) fn prefix_sums(weights: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(weights.len() + 1);
    let mut acc = 0.0f64;
    out.push(acc);
    for &w in weights {
        acc += w;
        out.push(acc);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_view_permutations_invert() {
        let values = [3.0, 1.0, 2.0, 1.0, 3.0];
        let weights = [10.0, 20.0, 30.0, 40.0, 50.0];
        let view = SortedView::new(&values, &weights);

        assert_eq!(view.values, vec![1.0, 1.0, 2.0, 3.0, 3.0]);
        // Stable: the two 1.0s keep original order (index 1 before 3),
        // likewise the two 3.0s (index 0 before 4).
        assert_eq!(view.order, vec![1, 3, 2, 0, 4]);
        assert_eq!(view.weights, vec![20.0, 40.0, 30.0, 10.0, 50.0]);
        for (pos, &orig) in view.order.iter().enumerate() {
            assert_eq!(view.rank[orig], pos);
        }
    }

    #[test]
    fn test_sorted_view_empty() {
        let view = SortedView::new(&[], &[]);
        assert!(view.values.is_empty());
        assert!(view.order.is_empty());
        assert!(view.rank.is_empty());
    }

    #[test]
    fn test_prefix_sums() {
        assert_eq!(prefix_sums(&[]), vec![0.0]);
        let p = prefix_sums(&[1.0, 2.0, 3.0]);
        assert_eq!(p, vec![0.0, 1.0, 3.0, 6.0]);
        // Range [1, 3) covers the 2.0 and 3.0 weights.
        assert_eq!(p[3] - p[1], 5.0);
    }
}
