//! CART regression tree.
//!
//! Greedy binary splits minimising the summed squared error of the two
//! children. Candidate thresholds are midpoints between consecutive distinct
//! feature values. Nodes live in a flat arena indexed by `usize`.

use crate::error::ForecastError;
use crate::regressor::{check_training_set, feature_width, Regressor};

/// Growth limits of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeParams {
    /// Maximum depth; `None` grows until leaves are pure.
    pub max_depth: Option<usize>,
    /// Minimum samples required to split a node.
    pub min_samples_split: usize,
    /// Minimum samples in each child.
    pub min_samples_leaf: usize,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

#[derive(Debug, Clone, Copy)]
struct BestSplit {
    feature: usize,
    threshold: f64,
    sse: f64,
}

/// A single regression tree.
///
/// # Examples
/// ```
/// use pricer_forecast::{Regressor, RegressionTree};
///
/// let x = vec![vec![1.0], vec![2.0], vec![3.0], vec![4.0]];
/// let y = vec![0.0, 0.0, 1.0, 1.0];
///
/// let mut tree = RegressionTree::default();
/// tree.fit(&x, &y).unwrap();
/// assert_eq!(tree.predict(&[vec![1.5], vec![3.5]]).unwrap(), vec![0.0, 1.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegressionTree {
    params: TreeParams,
    nodes: Vec<Node>,
    n_features: usize,
}

impl RegressionTree {
    /// Creates an unfitted tree.
    pub fn new(params: TreeParams) -> Self {
        Self {
            params,
            nodes: Vec::new(),
            n_features: 0,
        }
    }

    /// Growth limits.
    #[inline]
    pub fn params(&self) -> &TreeParams {
        &self.params
    }

    /// True once `fit` has succeeded.
    #[inline]
    pub fn is_fitted(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Number of nodes (leaves and splits).
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Depth of the deepest leaf; a single leaf has depth 0.
    pub fn depth(&self) -> usize {
        fn walk(nodes: &[Node], at: usize) -> usize {
            match nodes[at] {
                Node::Leaf { .. } => 0,
                Node::Split { left, right, .. } => 1 + walk(nodes, left).max(walk(nodes, right)),
            }
        }
        if self.nodes.is_empty() {
            0
        } else {
            walk(&self.nodes, 0)
        }
    }

    /// Fits on the rows listed in `sample`, which may repeat indices.
    ///
    /// Inputs are assumed validated by the caller.
    pub(crate) fn fit_indices(&mut self, features: &[Vec<f64>], targets: &[f64], sample: Vec<usize>) {
        self.nodes.clear();
        self.n_features = features.first().map_or(0, Vec::len);
        self.grow(features, targets, sample, 0);
    }

    /// Grows the subtree for `sample` and returns its arena index.
    fn grow(&mut self, features: &[Vec<f64>], targets: &[f64], mut sample: Vec<usize>, depth: usize) -> usize {
        let index = self.nodes.len();
        let value = mean(sample.iter().map(|&i| targets[i]));
        self.nodes.push(Node::Leaf { value });

        let depth_reached = self.params.max_depth.is_some_and(|max| depth >= max);
        if depth_reached || sample.len() < self.params.min_samples_split.max(2) {
            return index;
        }

        let Some(best) = self.best_split(features, targets, &mut sample) else {
            return index;
        };

        let (left, right): (Vec<usize>, Vec<usize>) = sample
            .into_iter()
            .partition(|&i| features[i][best.feature] <= best.threshold);

        let left = self.grow(features, targets, left, depth + 1);
        let right = self.grow(features, targets, right, depth + 1);
        self.nodes[index] = Node::Split {
            feature: best.feature,
            threshold: best.threshold,
            left,
            right,
        };
        index
    }

    /// Exhaustive search over features and midpoint thresholds.
    ///
    /// Returns `None` when the node is pure or no split respects
    /// `min_samples_leaf`.
    fn best_split(&self, features: &[Vec<f64>], targets: &[f64], sample: &mut [usize]) -> Option<BestSplit> {
        let n = sample.len();
        let total_sum: f64 = sample.iter().map(|&i| targets[i]).sum();
        let total_sq: f64 = sample.iter().map(|&i| targets[i] * targets[i]).sum();
        let parent_sse = total_sq - total_sum * total_sum / n as f64;
        if parent_sse <= f64::EPSILON * total_sq.max(1.0) {
            return None;
        }

        let min_leaf = self.params.min_samples_leaf.max(1);
        let mut best: Option<BestSplit> = None;

        for feature in 0..self.n_features {
            sample.sort_by(|&a, &b| features[a][feature].total_cmp(&features[b][feature]));

            let mut left_sum = 0.0;
            let mut left_sq = 0.0;
            for k in 0..n - 1 {
                let y = targets[sample[k]];
                left_sum += y;
                left_sq += y * y;

                let x_here = features[sample[k]][feature];
                let x_next = features[sample[k + 1]][feature];
                let n_left = k + 1;
                let n_right = n - n_left;
                if x_here == x_next || n_left < min_leaf || n_right < min_leaf {
                    continue;
                }

                let right_sum = total_sum - left_sum;
                let right_sq = total_sq - left_sq;
                let sse = (left_sq - left_sum * left_sum / n_left as f64)
                    + (right_sq - right_sum * right_sum / n_right as f64);

                if best.map_or(true, |b| sse < b.sse) {
                    let mut threshold = 0.5 * (x_here + x_next);
                    // Midpoint of adjacent floats can round up to x_next
                    if threshold >= x_next {
                        threshold = x_here;
                    }
                    best = Some(BestSplit {
                        feature,
                        threshold,
                        sse,
                    });
                }
            }
        }

        best
    }

    fn predict_row(&self, row: &[f64]) -> f64 {
        let mut at = 0;
        loop {
            match self.nodes[at] {
                Node::Leaf { value } => return value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    at = if row[feature] <= threshold { left } else { right };
                }
            }
        }
    }
}

impl Regressor for RegressionTree {
    fn fit(&mut self, features: &[Vec<f64>], targets: &[f64]) -> Result<(), ForecastError> {
        check_training_set(features, targets)?;
        self.fit_indices(features, targets, (0..features.len()).collect());
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<f64>, ForecastError> {
        if !self.is_fitted() {
            return Err(ForecastError::NotFitted);
        }
        if features.is_empty() {
            return Ok(Vec::new());
        }
        let width = feature_width(features)?;
        if width != self.n_features {
            return Err(ForecastError::DimensionMismatch {
                expected: self.n_features,
                actual: width,
            });
        }
        Ok(features.iter().map(|row| self.predict_row(row)).collect())
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
