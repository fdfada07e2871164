//! Statistical validation of generated datasets.
//!
//! Layered in two parts: [`stats`] holds the pure column math, [`auditor`]
//! turns it into dataset-level checks and a sectioned report. Only the
//! correlation and referential integrity checks gate the verdict; share
//! drift, bias, and row hygiene findings are warnings.

pub mod auditor;
pub mod stats;

pub use auditor::{
    AuditReport, BiasFindings, CorrelationCheck, DatasetAuditor, IntegrityCheck, MeanCheck,
    ShareCheck, SkewFinding, TableQuality, Trend, Verdict,
};
