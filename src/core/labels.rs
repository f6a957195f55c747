use crate::error::ScoringError;

/// Ground-truth class value of one training sample.
pub type Label = i8;

/// Read-only access to per-sample ground-truth labels.
pub trait LabelSource: Sync {
    /// Number of labelled samples.
    fn len(&self) -> usize;

    /// Label of sample `index`. Callers stay within `0..len()`.
    fn label(&self, index: usize) -> Label;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LabelSource for [Label] {
    fn len(&self) -> usize {
        <[Label]>::len(self)
    }

    fn label(&self, index: usize) -> Label {
        self[index]
    }
}

impl LabelSource for Vec<Label> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn label(&self, index: usize) -> Label {
        self[index]
    }
}

/// Copies the first `n` labels out of `source`, checking there are at most
/// two distinct class values among them.
pub fn collect_binary_labels<L: LabelSource + ?Sized>(
    source: &L,
    n: usize,
) -> Result<Vec<Label>, ScoringError> {
    if source.len() < n {
        return Err(ScoringError::LabelCountMismatch {
            expected: n,
            found: source.len(),
        });
    }
    let labels: Vec<Label> = (0..n).map(|i| source.label(i)).collect();
    let classes = distinct_classes(&labels);
    if classes.len() > 2 {
        return Err(ScoringError::TooManyClasses(classes));
    }
    Ok(labels)
}

/// Distinct class values in order of first appearance.
pub fn distinct_classes(labels: &[Label]) -> Vec<Label> {
    let mut out = Vec::with_capacity(2);
    for &y in labels {
        if !out.contains(&y) {
            out.push(y);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_classes_keeps_first_seen_order() {
        assert_eq!(distinct_classes(&[-1, 1, 1, -1]), vec![-1, 1]);
        assert!(distinct_classes(&[]).is_empty());
    }

    #[test]
    fn collect_rejects_short_source() {
        let labels: Vec<Label> = vec![1, -1];
        let err = collect_binary_labels(&labels, 3).unwrap_err();
        assert!(matches!(
            err,
            ScoringError::LabelCountMismatch {
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn collect_rejects_three_classes() {
        let labels: Vec<Label> = vec![0, 1, 2, 1];
        let err = collect_binary_labels(&labels, 4).unwrap_err();
        assert!(matches!(err, ScoringError::TooManyClasses(ref c) if c == &vec![0, 1, 2]));
    }

    #[test]
    fn collect_takes_prefix() {
        let labels: Vec<Label> = vec![0, 1, 0, 1, 7];
        let got = collect_binary_labels(&labels, 4).unwrap();
        assert_eq!(got, vec![0, 1, 0, 1]);
    }
}
