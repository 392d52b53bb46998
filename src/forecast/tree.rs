//! Single regression tree over one feature, grown by SSE-minimizing
//! binary splits.

enum Node {
    Leaf {
        value: f64,
    },
    Split {
        threshold: f64,
        left: usize,
        right: usize,
    },
}

pub(crate) struct RegressionTree {
    nodes: Vec<Node>,
    root: usize,
}

impl RegressionTree {
    /// Grow a tree on (x, y) pairs. Splits are chosen to minimize the
    /// summed squared error of the two children; growth stops when a node
    /// holds fewer than `2 * min_leaf` samples, has no x spread, or is
    /// already constant in y.
    pub(crate) fn fit(xs: &[f64], ys: &[f64], min_leaf: usize) -> Self {
        let mut order: Vec<usize> = (0..xs.len()).collect();
        order.sort_by(|&a, &b| xs[a].total_cmp(&xs[b]));
        let sx: Vec<f64> = order.iter().map(|&i| xs[i]).collect();
        let sy: Vec<f64> = order.iter().map(|&i| ys[i]).collect();

        let mut tree = Self {
            nodes: Vec::new(),
            root: 0,
        };
        tree.root = tree.build(&sx, &sy, 0, sx.len(), min_leaf.max(1));
        tree
    }

    pub(crate) fn predict(&self, x: f64) -> f64 {
        let mut index = self.root;
        loop {
            match &self.nodes[index] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    threshold,
                    left,
                    right,
                } => {
                    index = if x <= *threshold { *left } else { *right };
                }
            }
        }
    }

    /// Recursively grow the segment `[lo, hi)` of the x-sorted sample and
    /// return the index of its root node.
    fn build(&mut self, xs: &[f64], ys: &[f64], lo: usize, hi: usize, min_leaf: usize) -> usize {
        let len = hi - lo;
        let sum: f64 = ys[lo..hi].iter().sum();
        let sum_sq: f64 = ys[lo..hi].iter().map(|y| y * y).sum();
        let mean = sum / len as f64;
        let variance = sum_sq / len as f64 - mean * mean;

        if len < 2 * min_leaf || xs[lo] == xs[hi - 1] || variance <= f64::EPSILON {
            return self.push(Node::Leaf { value: mean });
        }

        // Scan split positions between distinct x values, tracking left
        // prefix sums so each candidate SSE is O(1).
        let mut best: Option<(f64, usize)> = None;
        let mut left_sum = 0.0;
        let mut left_sq = 0.0;
        for i in lo..hi - 1 {
            left_sum += ys[i];
            left_sq += ys[i] * ys[i];
            if xs[i] == xs[i + 1] {
                continue;
            }
            let n_left = (i - lo + 1) as f64;
            let n_right = (hi - i - 1) as f64;
            if (n_left as usize) < min_leaf || (n_right as usize) < min_leaf {
                continue;
            }
            let right_sum = sum - left_sum;
            let right_sq = sum_sq - left_sq;
            let sse = (left_sq - left_sum * left_sum / n_left)
                + (right_sq - right_sum * right_sum / n_right);
            if best.map_or(true, |(b, _)| sse < b) {
                best = Some((sse, i));
            }
        }

        match best {
            None => self.push(Node::Leaf { value: mean }),
            Some((_, split)) => {
                let threshold = (xs[split] + xs[split + 1]) / 2.0;
                let left = self.build(xs, ys, lo, split + 1, min_leaf);
                let right = self.build(xs, ys, split + 1, hi, min_leaf);
                self.push(Node::Split {
                    threshold,
                    left,
                    right,
                })
            }
        }
    }

    fn push(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}
