use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum, ValueHint};
use std::path::PathBuf;
use tracing::info;
use voxscore::config::ScoringConfig;
use voxscore::core::NodeRole;
use voxscore::evaluation::ScoreFormat;
use voxscore::generators::SyntheticVoxels;
use voxscore::tasks::{ScoringOptions, VoxelScorer};
use voxscore::telemetry::init_tracing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl From<ExportFormat> for ScoreFormat {
    fn from(f: ExportFormat) -> Self {
        match f {
            ExportFormat::Csv => ScoreFormat::Csv,
            ExportFormat::Tsv => ScoreFormat::Tsv,
            ExportFormat::Json => ScoreFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Scores every voxel of a synthetic two-condition dataset by cross-validated accuracy"
)]
struct Cli {
    /// JSON scoring config; flags below override its fields
    #[arg(long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Write the full score table here
    #[arg(long, value_hint = ValueHint::FilePath)]
    export: Option<PathBuf>,

    /// Format of the exported table
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    format: ExportFormat,

    /// Training samples (alternating conditions)
    #[arg(long, default_value_t = 32, value_parser = clap::value_parser!(usize))]
    trainings: usize,

    /// Voxels to score
    #[arg(long, default_value_t = 2_000, value_parser = clap::value_parser!(usize))]
    voxels: usize,

    /// Length of each voxel's correlation vector
    #[arg(long, default_value_t = 256, value_parser = clap::value_parser!(usize))]
    row_len: usize,

    #[arg(long, default_value_t = 2013)]
    seed: u64,

    /// Voxels that carry the condition signal
    #[arg(long, value_delimiter = ',', default_values_t = [17, 404, 1_337])]
    informative: Vec<usize>,

    /// How many top-ranked voxels to print
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Cross-validation folds
    #[arg(long, value_parser = clap::value_parser!(usize))]
    folds: Option<usize>,

    /// Worker threads (defaults to rayon's global pool)
    #[arg(long, value_parser = clap::value_parser!(usize))]
    threads: Option<usize>,
}

impl Cli {
    fn scoring_config(&self) -> Result<ScoringConfig> {
        let mut config = match &self.config {
            Some(path) => ScoringConfig::from_path(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => ScoringConfig::default(),
        };
        if let Some(folds) = self.folds {
            config.n_folds = folds;
        }
        if self.threads.is_some() {
            config.threads = self.threads;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.scoring_config()?;
    if let Some(&voxel) = cli.informative.iter().find(|&&v| v >= cli.voxels) {
        bail!("informative voxel {voxel} is out of range for {} voxels", cli.voxels);
    }

    let data = SyntheticVoxels::new(cli.trainings, cli.voxels, cli.row_len)
        .informative(&cli.informative)
        .seed(cli.seed);
    let voxels = data.voxel_set()?;
    let labels = data.labels();

    let scorer = VoxelScorer::new(
        NodeRole::from_rank(1),
        config.solver.build(),
        ScoringOptions::from(&config),
    )?;
    let (table, stats) = scorer.run_with_stats(&voxels, &labels, cli.voxels, cli.trainings)?;

    for record in table.top(cli.top) {
        println!("{record}");
    }
    println!("{}", table.summary());
    info!(
        seconds = stats.seconds,
        peak_in_flight = stats.peak_in_flight,
        "run finished"
    );

    if let Some(path) = &cli.export {
        table
            .export(path, cli.format.into())
            .with_context(|| format!("writing scores to {}", path.display()))?;
        info!(path = %path.display(), format = ?cli.format, "scores exported");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn help_prints_usage_instead_of_loading_a_config() {
        let err = Cli::try_parse_from(["voxscore", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn defaults_describe_the_demo_dataset() {
        let cli = Cli::try_parse_from(["voxscore"]).unwrap();
        assert_eq!((cli.trainings, cli.voxels, cli.row_len), (32, 2_000, 256));
        assert_eq!(cli.seed, 2013);
        assert_eq!(cli.informative, vec![17, 404, 1_337]);
        assert_eq!(cli.format, ExportFormat::Csv);
        assert!(cli.config.is_none() && cli.export.is_none());
        assert_eq!(cli.scoring_config().unwrap(), ScoringConfig::default());
    }

    #[test]
    fn format_flag_maps_to_score_format() {
        let cli = Cli::try_parse_from(["voxscore", "--format", "tsv"]).unwrap();
        assert_eq!(ScoreFormat::from(cli.format), ScoreFormat::Tsv);
        let cli = Cli::try_parse_from(["voxscore", "--format", "json"]).unwrap();
        assert_eq!(ScoreFormat::from(cli.format), ScoreFormat::Json);
        assert!(Cli::try_parse_from(["voxscore", "--format", "xml"]).is_err());
    }

    #[test]
    fn dataset_flags_parse() {
        let cli = Cli::try_parse_from([
            "voxscore",
            "--trainings",
            "12",
            "--voxels",
            "40",
            "--row-len",
            "8",
            "--seed",
            "7",
            "--informative",
            "1,2,3",
        ])
        .unwrap();
        assert_eq!((cli.trainings, cli.voxels, cli.row_len, cli.seed), (12, 40, 8, 7));
        assert_eq!(cli.informative, vec![1, 2, 3]);
        assert!(Cli::try_parse_from(["voxscore", "--voxels", "-3"]).is_err());
    }

    #[test]
    fn flags_override_config_file() {
        let mut tf = NamedTempFile::new().unwrap();
        write!(tf, r#"{{ "n_folds": 4, "threads": 2 }}"#).unwrap();
        let path = tf.path().to_str().unwrap();

        let cli = Cli::try_parse_from(["voxscore", "--config", path]).unwrap();
        let config = cli.scoring_config().unwrap();
        assert_eq!((config.n_folds, config.threads), (4, Some(2)));

        let cli =
            Cli::try_parse_from(["voxscore", "--config", path, "--folds", "6", "--threads", "3"])
                .unwrap();
        let config = cli.scoring_config().unwrap();
        assert_eq!((config.n_folds, config.threads), (6, Some(3)));
    }

    #[test]
    fn invalid_overrides_are_rejected() {
        let cli = Cli::try_parse_from(["voxscore", "--folds", "1"]).unwrap();
        assert!(cli.scoring_config().is_err());
        let cli = Cli::try_parse_from(["voxscore", "--threads", "0"]).unwrap();
        assert!(cli.scoring_config().is_err());
    }
}
