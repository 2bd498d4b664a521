//! Turns raw measurements into rows relative to the `call_user_func` baseline.

use invoke::{BenchConfig, InvokerKind};
use serde::Serialize;

use crate::error::{CliError, Result};
use crate::fixtures::TargetKind;
use crate::suite::{Measurement, Strategy};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub strategy: Strategy,
    /// Mean seconds per run of `iterations` calls
    pub time_secs: f64,
    /// `time_secs` minus the baseline's
    pub diff_secs: f64,
    /// `diff_secs` as a percentage of the baseline
    pub pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KindReport {
    pub kind: TargetKind,
    /// Wrapper the factory built for this kind
    pub invoker: InvokerKind,
    pub baseline_secs: f64,
    /// Sorted by ascending `diff_secs`
    pub rows: Vec<ReportRow>,
}

impl KindReport {
    /// Build the report for one kind. Measurements for other kinds are ignored.
    pub fn from_measurements(
        kind: TargetKind,
        invoker: InvokerKind,
        measurements: &[Measurement],
    ) -> Result<Self> {
        let baseline_secs = measurements
            .iter()
            .find(|m| m.kind == kind && m.strategy == Strategy::BASELINE)
            .map(|m| m.time.as_secs_f64())
            .ok_or(CliError::MissingBaseline(kind))?;

        let mut rows: Vec<ReportRow> = measurements
            .iter()
            .filter(|m| m.kind == kind)
            .map(|m| {
                let time_secs = m.time.as_secs_f64();
                let diff_secs = time_secs - baseline_secs;
                let pct = if baseline_secs > 0.0 {
                    diff_secs * 100.0 / baseline_secs
                } else {
                    0.0
                };
                ReportRow {
                    strategy: m.strategy,
                    time_secs,
                    diff_secs,
                    pct,
                }
            })
            .collect();

        // Stable, so equal diffs keep measurement order.
        rows.sort_by(|a, b| a.diff_secs.total_cmp(&b.diff_secs));

        Ok(Self {
            kind,
            invoker,
            baseline_secs,
            rows,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchReport {
    pub config: BenchConfig,
    pub kinds: Vec<KindReport>,
}
