//! Dataset Builder CLI
//!
//! Generate → CSV snapshot, plus score and audit over an existing
//! snapshot directory.

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "dataset_builder")]
#[command(about = "Generate, score, and audit synthetic influencer marketing data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Generate a dataset snapshot
    Generate {
        /// Output directory for the CSV tables
        #[arg(long)]
        out: PathBuf,

        /// Generation seed (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Generator config JSON file (shipped defaults when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Brand row count override
        #[arg(long)]
        brands: Option<usize>,

        /// Influencer row count override
        #[arg(long)]
        influencers: Option<usize>,

        /// Post row count override
        #[arg(long)]
        posts: Option<usize>,

        /// Conversion row count override
        #[arg(long)]
        conversions: Option<usize>,

        /// Touchpoint row count override
        #[arg(long)]
        touchpoints: Option<usize>,

        /// Write a copy of the manifest to this path
        #[arg(long)]
        manifest: Option<PathBuf>,
    },

    /// Score the influencers of an existing snapshot
    Score {
        /// Snapshot directory
        #[arg(long)]
        data: PathBuf,

        /// Output CSV file for the score table
        #[arg(long)]
        out: PathBuf,
    },

    /// Audit an existing snapshot against its expectations
    Audit {
        /// Snapshot directory
        #[arg(long)]
        data: PathBuf,

        /// Generator config JSON the snapshot was built from
        #[arg(long)]
        config: Option<PathBuf>,

        /// Exit nonzero when the verdict is REVIEW
        #[arg(long, default_value = "false")]
        strict: bool,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            out,
            seed,
            config,
            brands,
            influencers,
            posts,
            conversions,
            touchpoints,
            manifest,
        } => {
            let mut cfg = load_config(config.as_deref())?;
            if let Some(seed) = seed {
                cfg.seed = seed;
            }
            if let Some(n) = brands {
                cfg.n_brands = n;
            }
            if let Some(n) = influencers {
                cfg.n_influencers = n;
            }
            if let Some(n) = posts {
                cfg.n_posts = n;
            }
            if let Some(n) = conversions {
                cfg.n_conversions = n;
            }
            if let Some(n) = touchpoints {
                cfg.n_touchpoints = n;
            }

            println!("🔨 Generating dataset...");
            println!("   Output: {}", out.display());
            println!("   Seed:   {}", cfg.seed);

            let generation_seed = cfg.seed;
            let dataset = roi_core::DatasetGenerator::new(cfg)?.generate()?;
            let meta = dataset_builder::write_snapshot(&out, &dataset, generation_seed)?;

            print_manifest(&meta);

            if let Some(manifest_path) = manifest {
                save_manifest(&manifest_path, &meta)?;
            }
        }

        Commands::Score { data, out } => {
            println!("🔨 Scoring snapshot...");
            println!("   Data:   {}", data.display());
            println!("   Output: {}", out.display());

            let influencers = dataset_builder::read_influencers(&data)?;
            let posts = dataset_builder::read_posts(&data)?;
            let conversions = dataset_builder::read_conversions(&data)?;

            let scores = roi_core::ScoringEngine::new().score(&influencers, &posts, &conversions);
            dataset_builder::write_scores(&out, &scores)?;

            println!("\n✅ Scored {} influencers", scores.len());
            print_segments(&scores);
        }

        Commands::Audit { data, config, strict } => {
            println!("🔍 Auditing snapshot...");
            println!("   Data: {}", data.display());

            let cfg = load_config(config.as_deref())?;
            let dataset = dataset_builder::read_dataset(&data)?;
            let report = roi_core::DatasetAuditor::new().audit(&cfg, &dataset);

            println!("\n{}", report.summary());

            if strict && !report.verdict().is_pass() {
                anyhow::bail!("❌ Audit verdict is REVIEW - failing due to --strict");
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn load_config(path: Option<&Path>) -> Result<roi_core::GeneratorConfig> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            serde_json::from_str(&json).context("Failed to parse config JSON")
        }
        None => Ok(roi_core::GeneratorConfig::default()),
    }
}

#[cfg(feature = "cli")]
fn print_manifest(manifest: &dataset_builder::SnapshotManifest) {
    println!("\n✅ Snapshot written!");
    for stat in &manifest.tables {
        println!(
            "   {:<12} {:>8} rows  {:>10} bytes  sha256 {}",
            stat.name, stat.rows, stat.size_bytes, stat.sha256
        );
    }
    println!("   Schema:  v{}", manifest.schema_version);
    println!("   Created: {}", manifest.created_at);
}

#[cfg(feature = "cli")]
fn print_segments(scores: &[roi_core::ScoreRow]) {
    use roi_core::PerformanceSegment;

    for segment in
        [PerformanceSegment::High, PerformanceSegment::Medium, PerformanceSegment::Low]
    {
        let count = scores.iter().filter(|s| s.performance_segment == segment).count();
        println!("   {:<6} {}", segment, count);
    }
}

#[cfg(feature = "cli")]
fn save_manifest(path: &PathBuf, manifest: &dataset_builder::SnapshotManifest) -> Result<()> {
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(path, json)?;
    println!("\n📄 Manifest saved to: {}", path.display());
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("dataset_builder CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
