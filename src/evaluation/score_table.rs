use crate::core::ScoreRecord;
use crate::evaluation::{BasicEstimator, Estimator};
use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreFormat {
    Csv,
    Tsv,
    Json,
}

/// Aggregate view over a [`ScoreTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    pub count: u64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl Display for ScoreSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "voxels={}, mean_acc={:.6}, min_acc={:.6}, max_acc={:.6}",
            self.count, self.mean, self.min, self.max
        )
    }
}

/// Per-position scores in position order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTable {
    records: Vec<ScoreRecord>,
}

impl ScoreTable {
    pub fn from_records(records: Vec<ScoreRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn get(&self, position: usize) -> Option<&ScoreRecord> {
        self.records.get(position)
    }

    /// Records by descending accuracy; equal accuracies keep ascending id.
    pub fn ranked(&self) -> Vec<ScoreRecord> {
        let mut out = self.records.clone();
        out.sort_by(|a, b| {
            b.accuracy
                .total_cmp(&a.accuracy)
                .then(a.position_id.cmp(&b.position_id))
        });
        out
    }

    pub fn top(&self, k: usize) -> Vec<ScoreRecord> {
        let mut ranked = self.ranked();
        ranked.truncate(k);
        ranked
    }

    pub fn summary(&self) -> ScoreSummary {
        let mut acc = BasicEstimator::default();
        for r in &self.records {
            acc.add(r.accuracy);
        }
        ScoreSummary {
            count: acc.count(),
            mean: acc.estimation(),
            min: acc.min(),
            max: acc.max(),
        }
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: ScoreFormat) -> Result<(), Error> {
        match fmt {
            ScoreFormat::Csv => self.export_with_delimiter(path, ','),
            ScoreFormat::Tsv => self.export_with_delimiter(path, '\t'),
            ScoreFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(&self, path: P, delimiter: char) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        writeln!(w, "voxel{d}accuracy", d = delimiter)?;
        for r in &self.records {
            writeln!(w, "{}{d}{:.6}", r.position_id, r.accuracy, d = delimiter)?;
        }
        w.flush()
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut w, &self.records)?;
        writeln!(w)?;
        w.flush()
    }
}

impl FromIterator<ScoreRecord> for ScoreTable {
    fn from_iter<I: IntoIterator<Item = ScoreRecord>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    fn table() -> ScoreTable {
        [
            ScoreRecord::new(100, 0.5),
            ScoreRecord::new(101, 0.875),
            ScoreRecord::new(102, 0.25),
            ScoreRecord::new(103, 0.875),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn ranked_breaks_ties_by_id() {
        let ids: Vec<_> = table().ranked().iter().map(|r| r.position_id).collect();
        assert_eq!(ids, vec![101, 103, 100, 102]);
    }

    #[test]
    fn top_truncates() {
        let top = table().top(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[1].position_id, 103);
        assert_eq!(table().top(10).len(), 4);
    }

    #[test]
    fn summary_over_records() {
        let s = table().summary();
        assert_eq!(s.count, 4);
        assert!((s.mean - 0.625).abs() < 1e-12);
        assert_eq!(s.min, 0.25);
        assert_eq!(s.max, 0.875);
    }

    #[test]
    fn empty_summary_is_nan() {
        let s = ScoreTable::default().summary();
        assert_eq!(s.count, 0);
        assert!(s.mean.is_nan());
    }

    #[test]
    fn export_csv_and_tsv() {
        let t = ScoreTable::from_records(vec![ScoreRecord::new(7, 0.75), ScoreRecord::new(8, 1.0)]);

        let tf = NamedTempFile::new().unwrap();
        t.export(tf.path(), ScoreFormat::Csv).unwrap();
        let got = fs::read_to_string(tf.path()).unwrap();
        assert_eq!(got, "voxel,accuracy\n7,0.750000\n8,1.000000\n");

        let tf = NamedTempFile::new().unwrap();
        t.export(tf.path(), ScoreFormat::Tsv).unwrap();
        let got = fs::read_to_string(tf.path()).unwrap();
        assert_eq!(got, "voxel\taccuracy\n7\t0.750000\n8\t1.000000\n");
    }

    #[test]
    fn export_json_reads_back() {
        let t = table();
        let tf = NamedTempFile::new().unwrap();
        t.export(tf.path(), ScoreFormat::Json).unwrap();
        let got: Vec<ScoreRecord> =
            serde_json::from_str(&fs::read_to_string(tf.path()).unwrap()).unwrap();
        assert_eq!(got, t.records());
    }

    #[test]
    fn export_empty_csv_has_header_only() {
        let tf = NamedTempFile::new().unwrap();
        ScoreTable::default()
            .export(tf.path(), ScoreFormat::Csv)
            .unwrap();
        assert_eq!(fs::read_to_string(tf.path()).unwrap(), "voxel,accuracy\n");
    }
}
