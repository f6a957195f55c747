use crate::core::Label;
use crate::kernels::{KernelMode, SimilarityMatrix};
use ndarray::ArrayView2;

/// Lookup index that terminates every [`KernelRow`].
pub const SENTINEL_INDEX: i32 = -1;

/// One `(index, value)` entry of a training row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelNode {
    pub index: i32,
    pub value: f64,
}

impl KernelNode {
    #[inline]
    pub fn new(index: i32, value: f64) -> Self {
        Self { index, value }
    }

    #[inline]
    pub fn sentinel() -> Self {
        Self::new(SENTINEL_INDEX, 0.0)
    }

    #[inline]
    pub fn is_sentinel(&self) -> bool {
        self.index == SENTINEL_INDEX
    }
}

/// Sparse row of a [`TrainingProblem`], always closed by a sentinel node.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelRow {
    nodes: Vec<KernelNode>,
}

impl KernelRow {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn nodes(&self) -> &[KernelNode] {
        &self.nodes
    }

    /// Entries before the sentinel.
    pub fn entries(&self) -> &[KernelNode] {
        match self.nodes.iter().position(KernelNode::is_sentinel) {
            Some(end) => &self.nodes[..end],
            None => &self.nodes,
        }
    }

    /// 1-based sample ordinal carried by a precomputed-kernel row.
    pub fn ordinal(&self) -> Option<usize> {
        match self.nodes.first() {
            Some(node) if node.index == 0 && node.value >= 1.0 => Some(node.value as usize),
            _ => None,
        }
    }

    /// Value stored under lookup index `index`, if present.
    pub fn value_at(&self, index: i32) -> Option<f64> {
        self.entries()
            .iter()
            .find(|n| n.index == index)
            .map(|n| n.value)
    }

    /// Sparse dot product over matching indices, both rows sorted by index.
    pub fn dot(&self, other: &KernelRow) -> f64 {
        let (a, b) = (self.entries(), other.entries());
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < a.len() && j < b.len() {
            match a[i].index.cmp(&b[j].index) {
                std::cmp::Ordering::Equal => {
                    sum += a[i].value * b[j].value;
                    i += 1;
                    j += 1;
                }
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
            }
        }
        sum
    }

    fn push(&mut self, index: i32, value: f64) {
        self.nodes.push(KernelNode::new(index, value));
    }

    fn terminate(&mut self) {
        self.nodes.push(KernelNode::sentinel());
    }
}

/// Labels plus kernel rows in the layout a kernel solver consumes.
///
/// In [`KernelMode::Precomputed`] row `i` reads
/// `(0, i+1), (1, S[i][0]), ..., (N, S[i][N-1]), (-1, _)`.
/// In [`KernelMode::Linear`] row `i` reads
/// `(1, x_i[0]), ..., (R, x_i[R-1]), (-1, _)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingProblem {
    mode: KernelMode,
    labels: Vec<Label>,
    rows: Vec<KernelRow>,
}

impl TrainingProblem {
    pub fn precomputed(similarity: &SimilarityMatrix, labels: &[Label]) -> Self {
        let n = similarity.n_samples();
        debug_assert_eq!(labels.len(), n);

        let rows = (0..n)
            .map(|i| {
                let mut row = KernelRow::with_capacity(n + 2);
                row.push(0, (i + 1) as f64);
                for j in 0..n {
                    row.push((j + 1) as i32, similarity.get(i, j) as f64);
                }
                row.terminate();
                row
            })
            .collect();

        Self {
            mode: KernelMode::Precomputed,
            labels: labels.to_vec(),
            rows,
        }
    }

    pub fn linear(features: ArrayView2<'_, f32>, labels: &[Label]) -> Self {
        debug_assert_eq!(labels.len(), features.nrows());

        let rows = features
            .rows()
            .into_iter()
            .map(|x| {
                let mut row = KernelRow::with_capacity(x.len() + 1);
                for (r, &v) in x.iter().enumerate() {
                    row.push((r + 1) as i32, v as f64);
                }
                row.terminate();
                row
            })
            .collect();

        Self {
            mode: KernelMode::Linear,
            labels: labels.to_vec(),
            rows,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[inline]
    pub fn mode(&self) -> KernelMode {
        self.mode
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn rows(&self) -> &[KernelRow] {
        &self.rows
    }

    pub fn row(&self, i: usize) -> &KernelRow {
        &self.rows[i]
    }

    /// Kernel value between samples `a` and `b`.
    ///
    /// Precomputed rows are looked up by the ordinal carried in `b`'s leading
    /// node, so the value comes from `a`'s row at lookup index `ordinal(b)`.
    pub fn kernel(&self, a: usize, b: usize) -> f64 {
        match self.mode {
            KernelMode::Precomputed => {
                let ordinal = self.rows[b].ordinal().unwrap_or(b + 1);
                self.rows[a].nodes[ordinal].value
            }
            KernelMode::Linear => self.rows[a].dot(&self.rows[b]),
        }
    }

    /// Heap bytes held by the labels and node arrays.
    pub fn heap_bytes(&self) -> usize {
        let nodes: usize = self.rows.iter().map(|r| r.nodes.capacity()).sum();
        nodes * std::mem::size_of::<KernelNode>()
            + self.rows.capacity() * std::mem::size_of::<KernelRow>()
            + self.labels.capacity() * std::mem::size_of::<Label>()
    }
}
