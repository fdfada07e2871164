//! Dataset Builder Library
//!
//! Dataset → per-table CSV → SHA256 manifest pipeline, plus the typed
//! readers the score and audit commands use to load a snapshot back.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

use roi_core::{
    BrandRow, ConversionRow, Dataset, InfluencerRow, PostRow, ScoreRow, TouchpointRow,
};

/// Manifest file name, written next to the tables.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Checksum and size of one written table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableStat {
    pub name: String,
    pub rows: usize,
    pub size_bytes: u64,
    /// SHA256 of the CSV bytes (hex string)
    pub sha256: String,
}

/// Snapshot metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotManifest {
    /// Table layout version
    pub schema_version: u8,
    /// Seed the snapshot was generated from
    pub seed: u64,
    /// Creation time (RFC3339)
    pub created_at: String,
    pub tables: Vec<TableStat>,
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Serializes one table to CSV bytes, headers included.
fn table_bytes<T: Serialize>(rows: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row).context("Failed to serialize row to CSV")?;
    }
    writer
        .into_inner()
        .map_err(|e| e.into_error())
        .context("Failed to flush CSV buffer")
}

/// Writes the five tables under `dir` and a manifest next to them.
///
/// The directory is created if needed. The manifest hashes the exact
/// bytes that landed on disk, so a later [`verify_snapshot`] catches any
/// modification.
pub fn write_snapshot(dir: &Path, dataset: &Dataset, seed: u64) -> Result<SnapshotManifest> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create snapshot directory: {}", dir.display()))?;

    // 1. Serialize each table in generation order
    let entries: [(&str, Vec<u8>, usize); 5] = [
        ("brands", table_bytes(&dataset.brands)?, dataset.brands.len()),
        ("influencers", table_bytes(&dataset.influencers)?, dataset.influencers.len()),
        ("posts", table_bytes(&dataset.posts)?, dataset.posts.len()),
        ("conversions", table_bytes(&dataset.conversions)?, dataset.conversions.len()),
        ("touchpoints", table_bytes(&dataset.touchpoints)?, dataset.touchpoints.len()),
    ];

    // 2. Write and hash each file
    let mut tables = Vec::with_capacity(entries.len());
    for (name, bytes, rows) in entries {
        let path = dir.join(format!("{name}.csv"));
        fs::write(&path, &bytes)
            .with_context(|| format!("Failed to write table: {}", path.display()))?;
        tables.push(TableStat {
            name: name.to_string(),
            rows,
            size_bytes: bytes.len() as u64,
            sha256: sha256_hex(&bytes),
        });
    }

    // 3. Manifest
    let manifest = SnapshotManifest {
        schema_version: roi_core::SCHEMA_VERSION,
        seed,
        created_at: chrono::Utc::now().to_rfc3339(),
        tables,
    };
    let manifest_path = dir.join(MANIFEST_FILE);
    let manifest_json =
        serde_json::to_string_pretty(&manifest).context("Failed to serialize manifest")?;
    fs::write(&manifest_path, manifest_json)
        .with_context(|| format!("Failed to write manifest: {}", manifest_path.display()))?;

    Ok(manifest)
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .from_path(path)
        .with_context(|| format!("Failed to open table: {}", path.display()))?;
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record.with_context(|| format!("Failed to parse row in {}", path.display()))?);
    }
    Ok(rows)
}

pub fn read_brands(dir: &Path) -> Result<Vec<BrandRow>> {
    read_rows(&dir.join("brands.csv"))
}

pub fn read_influencers(dir: &Path) -> Result<Vec<InfluencerRow>> {
    read_rows(&dir.join("influencers.csv"))
}

pub fn read_posts(dir: &Path) -> Result<Vec<PostRow>> {
    read_rows(&dir.join("posts.csv"))
}

pub fn read_conversions(dir: &Path) -> Result<Vec<ConversionRow>> {
    read_rows(&dir.join("conversions.csv"))
}

pub fn read_touchpoints(dir: &Path) -> Result<Vec<TouchpointRow>> {
    read_rows(&dir.join("touchpoints.csv"))
}

/// Loads all five tables of a snapshot.
pub fn read_dataset(dir: &Path) -> Result<Dataset> {
    Ok(Dataset {
        brands: read_brands(dir)?,
        influencers: read_influencers(dir)?,
        posts: read_posts(dir)?,
        conversions: read_conversions(dir)?,
        touchpoints: read_touchpoints(dir)?,
    })
}

/// Writes the derived score table to one CSV file.
pub fn write_scores(path: &Path, scores: &[ScoreRow]) -> Result<()> {
    let bytes = table_bytes(scores)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(path, bytes).with_context(|| format!("Failed to write scores: {}", path.display()))
}

pub fn read_scores(path: &Path) -> Result<Vec<ScoreRow>> {
    read_rows(path)
}

/// Reads the manifest written by [`write_snapshot`].
pub fn read_manifest(dir: &Path) -> Result<SnapshotManifest> {
    let path = dir.join(MANIFEST_FILE);
    let json = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
    serde_json::from_str(&json).context("Failed to parse manifest")
}

/// Recomputes table checksums against a manifest.
///
/// Returns the names of tables whose bytes no longer match.
pub fn verify_snapshot(dir: &Path, manifest: &SnapshotManifest) -> Result<Vec<String>> {
    let mut mismatches = Vec::new();
    for stat in &manifest.tables {
        let path = dir.join(format!("{}.csv", stat.name));
        let bytes = fs::read(&path)
            .with_context(|| format!("Failed to read table: {}", path.display()))?;
        if sha256_hex(&bytes) != stat.sha256 {
            mismatches.push(stat.name.clone());
        }
    }
    Ok(mismatches)
}
