//! Statistical audit of a generated dataset.
//!
//! The auditor replays the expectations a dataset was generated under and
//! reports how well the output matches them. Checks fall in two classes:
//! gating checks (the five structural correlations and the three
//! referential integrity scans) decide the verdict, while distribution,
//! bias, and quality checks only raise warnings. A dataset that drifts on
//! shares is still usable; one with dangling references or inverted
//! correlations is not.

use rustc_hash::FxHashSet;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};
use uuid::Uuid;

use crate::audit::stats;
use crate::benchmarks::audit as bench;
use crate::config::GeneratorConfig;
use crate::models::{AttributionModel, Dataset, Platform};

/// One categorical share compared against its configured weight.
#[derive(Debug, Clone, Serialize)]
pub struct ShareCheck {
    pub label: String,
    pub expected: f64,
    pub observed: f64,
    pub ok: bool,
}

/// One per-tier engagement mean compared against the configured mean.
#[derive(Debug, Clone, Serialize)]
pub struct MeanCheck {
    pub label: String,
    pub expected: f64,
    pub observed: f64,
    pub ok: bool,
}

/// Expected sign of a structural correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Negative,
    Positive,
    StrongPositive,
}

impl Trend {
    fn holds(self, r: f64, strong: f64) -> bool {
        match self {
            Trend::Negative => r < 0.0,
            Trend::Positive => r > 0.0,
            Trend::StrongPositive => r > strong,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Trend::Negative => "negative",
            Trend::Positive => "positive",
            Trend::StrongPositive => "strongly positive",
        }
    }
}

/// One Pearson correlation with its expected trend.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationCheck {
    pub label: String,
    pub expected: Trend,
    pub observed: f64,
    pub ok: bool,
}

/// One cross-table reference scan.
#[derive(Debug, Clone, Serialize)]
pub struct IntegrityCheck {
    pub label: String,
    /// Rows that carried a reference to the upstream table.
    pub checked: usize,
    pub dangling: usize,
    pub ok: bool,
}

/// A platform whose audience leans into one gender past the cap.
#[derive(Debug, Clone, Serialize)]
pub struct SkewFinding {
    pub platform: Platform,
    pub gender: String,
    pub share: f64,
}

/// Geographic and demographic balance findings.
#[derive(Debug, Clone, Serialize)]
pub struct BiasFindings {
    pub us_share: f64,
    pub us_ok: bool,
    pub platform_gender_skews: Vec<SkewFinding>,
    /// Observed attribution type mix, reported without a threshold.
    pub attribution_mix: Vec<(AttributionModel, f64)>,
}

/// Row hygiene findings for one table.
#[derive(Debug, Clone, Serialize)]
pub struct TableQuality {
    pub table: &'static str,
    pub rows: usize,
    pub duplicate_ids: usize,
    /// Optional reference columns and the share of rows leaving them unset.
    /// Organic rows are expected here, so these never warn on their own.
    pub missing: Vec<(&'static str, f64)>,
    /// Numeric columns whose z-score outlier share exceeds the cap.
    pub outlier_columns: Vec<(&'static str, f64)>,
}

/// Verdict over the gating checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Pass,
    Review,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Pass => "PASS",
            Verdict::Review => "REVIEW",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full audit output, one field per report section.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub shares: Vec<ShareCheck>,
    pub engagement_means: Vec<MeanCheck>,
    pub correlations: Vec<CorrelationCheck>,
    pub bias: BiasFindings,
    pub quality: Vec<TableQuality>,
    pub integrity: Vec<IntegrityCheck>,
}

impl AuditReport {
    /// Passed and total counts over the gating checks only.
    pub fn gate_count(&self) -> (usize, usize) {
        let passed = self.correlations.iter().filter(|c| c.ok).count()
            + self.integrity.iter().filter(|c| c.ok).count();
        (passed, self.correlations.len() + self.integrity.len())
    }

    pub fn verdict(&self) -> Verdict {
        let (passed, total) = self.gate_count();
        if passed == total {
            Verdict::Pass
        } else {
            Verdict::Review
        }
    }

    /// Number of non-gating checks that missed their target.
    pub fn warning_count(&self) -> usize {
        let shares = self.shares.iter().filter(|c| !c.ok).count();
        let means = self.engagement_means.iter().filter(|c| !c.ok).count();
        let bias = usize::from(!self.bias.us_ok) + self.bias.platform_gender_skews.len();
        let quality: usize = self
            .quality
            .iter()
            .map(|t| usize::from(t.duplicate_ids > 0) + t.outlier_columns.len())
            .sum();
        shares + means + bias + quality
    }

    /// Renders the report as a sectioned text block, one line per check.
    pub fn summary(&self) -> String {
        let mut out = String::new();

        out.push_str("--- Distributions ---\n");
        for check in &self.shares {
            out.push_str(&format!(
                "{} {}: {:.1}% (expected {:.1}%)\n",
                marker(check.ok),
                check.label,
                check.observed * 100.0,
                check.expected * 100.0
            ));
        }
        for check in &self.engagement_means {
            out.push_str(&format!(
                "{} {}: {:.2} (expected {:.2})\n",
                marker(check.ok),
                check.label,
                check.observed,
                check.expected
            ));
        }

        out.push_str("--- Correlations ---\n");
        for check in &self.correlations {
            out.push_str(&format!(
                "{} {}: {:+.3} (expected {})\n",
                marker(check.ok),
                check.label,
                check.observed,
                check.expected.describe()
            ));
        }

        out.push_str("--- Bias ---\n");
        out.push_str(&format!(
            "{} United States share: {:.1}%\n",
            marker(self.bias.us_ok),
            self.bias.us_share * 100.0
        ));
        for skew in &self.bias.platform_gender_skews {
            out.push_str(&format!(
                "WARN {} audience skews {}: {:.1}%\n",
                skew.platform,
                skew.gender,
                skew.share * 100.0
            ));
        }
        let mix: Vec<String> = self
            .bias
            .attribution_mix
            .iter()
            .map(|(model, share)| format!("{} {:.1}%", model, share * 100.0))
            .collect();
        out.push_str(&format!("     attribution mix: {}\n", mix.join(", ")));

        out.push_str("--- Quality ---\n");
        for table in &self.quality {
            out.push_str(&format!(
                "{} {}: {} rows, {} duplicate ids\n",
                marker(table.duplicate_ids == 0),
                table.table,
                table.rows,
                table.duplicate_ids
            ));
            for (column, share) in &table.missing {
                out.push_str(&format!(
                    "     {} unset on {:.1}% of rows\n",
                    column,
                    share * 100.0
                ));
            }
            for (column, share) in &table.outlier_columns {
                out.push_str(&format!(
                    "WARN {} outlier share {:.1}%\n",
                    column,
                    share * 100.0
                ));
            }
        }

        out.push_str("--- Referential integrity ---\n");
        for check in &self.integrity {
            out.push_str(&format!(
                "{} {}: {} of {} references dangling\n",
                marker(check.ok),
                check.label,
                check.dangling,
                check.checked
            ));
        }

        let (passed, total) = self.gate_count();
        out.push_str(&format!(
            "Verdict: {} (gates {}/{}, warnings {})\n",
            self.verdict(),
            passed,
            total,
            self.warning_count()
        ));
        out
    }
}

fn marker(ok: bool) -> &'static str {
    if ok {
        "  OK"
    } else {
        "WARN"
    }
}

fn share_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64
}

fn duplicate_count(ids: impl Iterator<Item = Uuid>) -> usize {
    let mut seen = FxHashSet::default();
    ids.filter(|id| !seen.insert(*id)).count()
}

/// Runs every audit section against a dataset.
///
/// Thresholds are fields so a caller can audit against looser or tighter
/// expectations than the shipped defaults.
#[derive(Debug, Clone)]
pub struct DatasetAuditor {
    share_tolerance: f64,
    engagement_tolerance: f64,
    strong_correlation: f64,
    us_share_cap: f64,
    gender_skew_cap: f64,
    outlier_sigma: f64,
    outlier_share_cap: f64,
}

impl Default for DatasetAuditor {
    fn default() -> Self {
        DatasetAuditor {
            share_tolerance: bench::SHARE_TOLERANCE,
            engagement_tolerance: bench::ENGAGEMENT_TOLERANCE,
            strong_correlation: bench::STRONG_CORRELATION,
            us_share_cap: bench::US_SHARE_CAP,
            gender_skew_cap: bench::GENDER_SKEW_CAP,
            outlier_sigma: bench::OUTLIER_SIGMA,
            outlier_share_cap: bench::OUTLIER_SHARE_CAP,
        }
    }
}

impl DatasetAuditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Audits `dataset` against the expectations in `config`.
    pub fn audit(&self, config: &GeneratorConfig, dataset: &Dataset) -> AuditReport {
        debug!(
            "auditing {} rows across {} tables",
            dataset.total_rows(),
            dataset.table_counts().len()
        );
        let report = AuditReport {
            shares: self.check_shares(config, dataset),
            engagement_means: self.check_engagement_means(config, dataset),
            correlations: self.check_correlations(dataset),
            bias: self.check_bias(config, dataset),
            quality: self.check_quality(dataset),
            integrity: self.check_integrity(dataset),
        };
        let (passed, total) = report.gate_count();
        info!(
            "audit verdict {} with {}/{} gates and {} warnings",
            report.verdict(),
            passed,
            total,
            report.warning_count()
        );
        report
    }

    fn share_check(&self, label: String, expected: f64, observed: f64) -> ShareCheck {
        let ok = (observed - expected).abs() < self.share_tolerance;
        ShareCheck { label, expected, observed, ok }
    }

    fn check_shares(&self, config: &GeneratorConfig, dataset: &Dataset) -> Vec<ShareCheck> {
        let influencers = &dataset.influencers;
        let mut checks = Vec::new();

        for spec in &config.tier_specs {
            let count = influencers.iter().filter(|i| i.tier == spec.tier).count();
            checks.push(self.share_check(
                format!("tier {}", spec.tier),
                spec.weight,
                share_of(count, influencers.len()),
            ));
        }
        for (platform, weight) in &config.platform_shares {
            let count = influencers.iter().filter(|i| i.platform == *platform).count();
            checks.push(self.share_check(
                format!("platform {}", platform),
                *weight,
                share_of(count, influencers.len()),
            ));
        }
        for (gender, weight) in &config.gender_shares {
            let count = influencers.iter().filter(|i| i.gender == *gender).count();
            checks.push(self.share_check(
                format!("gender {}", gender),
                *weight,
                share_of(count, influencers.len()),
            ));
        }
        for (age_group, weight) in &config.age_group_shares {
            let count = influencers.iter().filter(|i| i.age_group == *age_group).count();
            checks.push(self.share_check(
                format!("age {}", age_group),
                *weight,
                share_of(count, influencers.len()),
            ));
        }

        for mix in &config.content_mixes {
            let platform_posts: Vec<_> =
                dataset.posts.iter().filter(|p| p.platform == mix.platform).collect();
            for (content_type, weight) in &mix.types {
                let count =
                    platform_posts.iter().filter(|p| p.content_type == *content_type).count();
                checks.push(self.share_check(
                    format!("{} {}", mix.platform, content_type),
                    *weight,
                    share_of(count, platform_posts.len()),
                ));
            }
        }
        checks
    }

    fn check_engagement_means(
        &self,
        config: &GeneratorConfig,
        dataset: &Dataset,
    ) -> Vec<MeanCheck> {
        config
            .tier_specs
            .iter()
            .filter_map(|spec| {
                let rates: Vec<f64> = dataset
                    .influencers
                    .iter()
                    .filter(|i| i.tier == spec.tier)
                    .map(|i| i.engagement_rate)
                    .collect();
                if rates.is_empty() {
                    return None;
                }
                let expected = spec.engagement.0;
                let observed = stats::mean(&rates);
                Some(MeanCheck {
                    label: format!("engagement {}", spec.tier),
                    expected,
                    observed,
                    ok: (observed - expected).abs() < self.engagement_tolerance,
                })
            })
            .collect()
    }

    fn check_correlations(&self, dataset: &Dataset) -> Vec<CorrelationCheck> {
        let followers: Vec<f64> =
            dataset.influencers.iter().map(|i| i.follower_count as f64).collect();
        let engagement: Vec<f64> =
            dataset.influencers.iter().map(|i| i.engagement_rate).collect();
        let cost: Vec<f64> =
            dataset.influencers.iter().map(|i| i.avg_collaboration_cost).collect();
        let tier_rank: Vec<f64> =
            dataset.influencers.iter().map(|i| i.tier.index() as f64).collect();
        let authenticity: Vec<f64> =
            dataset.influencers.iter().map(|i| i.audience_authenticity_score).collect();
        let likes: Vec<f64> = dataset.posts.iter().map(|p| p.likes as f64).collect();
        let comments: Vec<f64> = dataset.posts.iter().map(|p| p.comments as f64).collect();
        let saves: Vec<f64> = dataset.posts.iter().map(|p| p.saves as f64).collect();

        let pairs: [(&str, Trend, f64); 5] = [
            (
                "follower count vs engagement rate",
                Trend::Negative,
                stats::pearson(&followers, &engagement),
            ),
            (
                "follower count vs collaboration cost",
                Trend::Positive,
                stats::pearson(&followers, &cost),
            ),
            (
                "tier rank vs authenticity",
                Trend::Negative,
                stats::pearson(&tier_rank, &authenticity),
            ),
            ("likes vs comments", Trend::StrongPositive, stats::pearson(&likes, &comments)),
            ("saves vs likes", Trend::StrongPositive, stats::pearson(&saves, &likes)),
        ];
        pairs
            .into_iter()
            .map(|(label, expected, observed)| CorrelationCheck {
                label: label.to_string(),
                expected,
                observed,
                ok: expected.holds(observed, self.strong_correlation),
            })
            .collect()
    }

    fn check_bias(&self, config: &GeneratorConfig, dataset: &Dataset) -> BiasFindings {
        let influencers = &dataset.influencers;
        let us_count = influencers.iter().filter(|i| i.country == "United States").count();
        let us_share = share_of(us_count, influencers.len());

        let mut skews = Vec::new();
        for platform in Platform::SOCIAL {
            let on_platform: Vec<_> =
                influencers.iter().filter(|i| i.platform == platform).collect();
            if on_platform.is_empty() {
                continue;
            }
            for (gender, _) in &config.gender_shares {
                let count = on_platform.iter().filter(|i| i.gender == *gender).count();
                let share = share_of(count, on_platform.len());
                if share > self.gender_skew_cap {
                    skews.push(SkewFinding { platform, gender: gender.clone(), share });
                }
            }
        }

        let attribution_mix = config
            .attribution_shares
            .iter()
            .map(|(model, _)| {
                let count =
                    dataset.conversions.iter().filter(|c| c.attribution_type == *model).count();
                (*model, share_of(count, dataset.conversions.len()))
            })
            .collect();

        BiasFindings {
            us_share,
            us_ok: us_share < self.us_share_cap,
            platform_gender_skews: skews,
            attribution_mix,
        }
    }

    fn table_quality(
        &self,
        table: &'static str,
        rows: usize,
        duplicate_ids: usize,
        missing: Vec<(&'static str, f64)>,
        columns: Vec<(&'static str, Vec<f64>)>,
    ) -> TableQuality {
        let outlier_columns = columns
            .into_iter()
            .map(|(name, values)| (name, stats::outlier_share(&values, self.outlier_sigma)))
            .filter(|(_, share)| *share > self.outlier_share_cap)
            .collect();
        TableQuality { table, rows, duplicate_ids, missing, outlier_columns }
    }

    fn check_quality(&self, dataset: &Dataset) -> Vec<TableQuality> {
        let brands = &dataset.brands;
        let influencers = &dataset.influencers;
        let posts = &dataset.posts;
        let conversions = &dataset.conversions;
        let touchpoints = &dataset.touchpoints;

        vec![
            self.table_quality(
                "brands",
                brands.len(),
                duplicate_count(brands.iter().map(|b| b.brand_id)),
                Vec::new(),
                vec![
                    (
                        "monthly_social_budget",
                        brands.iter().map(|b| b.monthly_social_budget).collect(),
                    ),
                    ("avg_product_price", brands.iter().map(|b| b.avg_product_price).collect()),
                    ("founded_year", brands.iter().map(|b| b.founded_year as f64).collect()),
                ],
            ),
            self.table_quality(
                "influencers",
                influencers.len(),
                duplicate_count(influencers.iter().map(|i| i.influencer_id)),
                Vec::new(),
                vec![
                    (
                        "follower_count",
                        influencers.iter().map(|i| i.follower_count as f64).collect(),
                    ),
                    ("engagement_rate", influencers.iter().map(|i| i.engagement_rate).collect()),
                    (
                        "avg_post_frequency",
                        influencers.iter().map(|i| i.avg_post_frequency).collect(),
                    ),
                    (
                        "audience_authenticity_score",
                        influencers.iter().map(|i| i.audience_authenticity_score).collect(),
                    ),
                    (
                        "avg_collaboration_cost",
                        influencers.iter().map(|i| i.avg_collaboration_cost).collect(),
                    ),
                ],
            ),
            self.table_quality(
                "posts",
                posts.len(),
                duplicate_count(posts.iter().map(|p| p.post_id)),
                vec![(
                    "brand_id",
                    share_of(posts.iter().filter(|p| p.brand_id.is_none()).count(), posts.len()),
                )],
                vec![
                    ("post_time_hour", posts.iter().map(|p| p.post_time_hour as f64).collect()),
                    ("day_of_week", posts.iter().map(|p| p.day_of_week as f64).collect()),
                    ("caption_length", posts.iter().map(|p| p.caption_length as f64).collect()),
                    ("hashtag_count", posts.iter().map(|p| p.hashtag_count as f64).collect()),
                    ("product_count", posts.iter().map(|p| p.product_count as f64).collect()),
                ],
            ),
            self.table_quality(
                "conversions",
                conversions.len(),
                duplicate_count(conversions.iter().map(|c| c.conversion_id)),
                vec![
                    (
                        "post_id",
                        share_of(
                            conversions.iter().filter(|c| c.post_id.is_none()).count(),
                            conversions.len(),
                        ),
                    ),
                    (
                        "influencer_id",
                        share_of(
                            conversions.iter().filter(|c| c.influencer_id.is_none()).count(),
                            conversions.len(),
                        ),
                    ),
                ],
                vec![
                    ("order_value", conversions.iter().map(|c| c.order_value).collect()),
                    (
                        "customer_journey_length",
                        conversions.iter().map(|c| c.customer_journey_length as f64).collect(),
                    ),
                    (
                        "touchpoints_count",
                        conversions.iter().map(|c| c.touchpoints_count as f64).collect(),
                    ),
                ],
            ),
            self.table_quality(
                "touchpoints",
                touchpoints.len(),
                duplicate_count(touchpoints.iter().map(|t| t.touchpoint_id)),
                vec![
                    (
                        "post_id",
                        share_of(
                            touchpoints.iter().filter(|t| t.post_id.is_none()).count(),
                            touchpoints.len(),
                        ),
                    ),
                    (
                        "conversion_id",
                        share_of(
                            touchpoints.iter().filter(|t| t.conversion_id.is_none()).count(),
                            touchpoints.len(),
                        ),
                    ),
                ],
                vec![(
                    "attribution_weight",
                    touchpoints.iter().map(|t| t.attribution_weight).collect(),
                )],
            ),
        ]
    }

    fn check_integrity(&self, dataset: &Dataset) -> Vec<IntegrityCheck> {
        let influencer_ids: FxHashSet<Uuid> =
            dataset.influencers.iter().map(|i| i.influencer_id).collect();
        let brand_ids: FxHashSet<Uuid> = dataset.brands.iter().map(|b| b.brand_id).collect();
        let post_ids: FxHashSet<Uuid> = dataset.posts.iter().map(|p| p.post_id).collect();

        let post_influencer_dangling = dataset
            .posts
            .iter()
            .filter(|p| !influencer_ids.contains(&p.influencer_id))
            .count();

        let post_brand_refs: Vec<Uuid> =
            dataset.posts.iter().filter_map(|p| p.brand_id).collect();
        let post_brand_dangling =
            post_brand_refs.iter().filter(|id| !brand_ids.contains(*id)).count();

        let conversion_post_refs: Vec<Uuid> =
            dataset.conversions.iter().filter_map(|c| c.post_id).collect();
        let conversion_post_dangling =
            conversion_post_refs.iter().filter(|id| !post_ids.contains(*id)).count();

        vec![
            IntegrityCheck {
                label: "posts -> influencers".to_string(),
                checked: dataset.posts.len(),
                dangling: post_influencer_dangling,
                ok: post_influencer_dangling == 0,
            },
            IntegrityCheck {
                label: "posts -> brands".to_string(),
                checked: post_brand_refs.len(),
                dangling: post_brand_dangling,
                ok: post_brand_dangling == 0,
            },
            IntegrityCheck {
                label: "conversions -> posts".to_string(),
                checked: conversion_post_refs.len(),
                dangling: conversion_post_dangling,
                ok: conversion_post_dangling == 0,
            },
        ]
    }
}
