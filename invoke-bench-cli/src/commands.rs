use crate::{
    cli::OutputFormat,
    config::AppConfig,
    error::Result,
    fixtures::{Fixtures, TargetKind},
    output::{OutputManager, write_output},
    report::{BenchReport, KindReport},
    suite::{BenchSuite, Strategy},
};
use indicatif::{ProgressBar, ProgressStyle};
use invoke::BenchConfig;
use std::path::Path;
use tracing::info;

pub struct CommandExecutor {
    config: AppConfig,
}

impl CommandExecutor {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run_bench(
        &self,
        bench_config: BenchConfig,
        kinds: &[TargetKind],
        output_format: Option<OutputFormat>,
        output_file: Option<&Path>,
        show_progress: bool,
    ) -> Result<()> {
        let report = self.collect_report(bench_config, kinds, show_progress)?;

        let format = output_format.unwrap_or(self.config.default_output_format);
        let output_manager = OutputManager::new(self.config.colored_output);
        let output = output_manager.format_report(&report, format)?;
        write_output(&output, output_file)?;

        if let Some(path) = output_file {
            info!("Report written to {}", path.display());
        }
        Ok(())
    }

    /// Run the suite for `kinds` (all kinds when empty) and build the report.
    pub fn collect_report(
        &self,
        bench_config: BenchConfig,
        kinds: &[TargetKind],
        show_progress: bool,
    ) -> Result<BenchReport> {
        let kinds: Vec<TargetKind> = if kinds.is_empty() {
            TargetKind::ALL.to_vec()
        } else {
            let mut unique = Vec::with_capacity(kinds.len());
            for kind in kinds {
                if !unique.contains(kind) {
                    unique.push(*kind);
                }
            }
            unique
        };

        let suite = BenchSuite::new(bench_config, Fixtures::new());
        let total = (kinds.len() * Strategy::ALL.len()) as u64;
        let pb = if show_progress {
            self.create_progress_bar(total)
        } else {
            ProgressBar::hidden()
        };

        let mut reports = Vec::with_capacity(kinds.len());
        for kind in kinds {
            let measurements = suite.run_kind(kind, |m| {
                pb.set_message(format!("{} / {}", m.kind, m.strategy));
                pb.inc(1);
            })?;
            let invoker = suite.invoker_kind(kind)?;
            reports.push(KindReport::from_measurements(kind, invoker, &measurements)?);
        }
        pb.finish_and_clear();

        Ok(BenchReport {
            config: *suite.config(),
            kinds: reports,
        })
    }

    fn create_progress_bar(&self, total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .map(|style| style.progress_chars("█▉▊▋▌▍▎▏  "))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoke::InvokerKind;

    #[test]
    fn test_collect_report_covers_requested_kinds_once() {
        let executor = CommandExecutor::new(AppConfig::default());
        let config = BenchConfig::builder().iterations(5).average_over(1).build();

        let report = executor
            .collect_report(
                config,
                &[TargetKind::Instance, TargetKind::Lambda, TargetKind::Instance],
                false,
            )
            .unwrap();

        let kinds: Vec<TargetKind> = report.kinds.iter().map(|k| k.kind).collect();
        assert_eq!(kinds, vec![TargetKind::Instance, TargetKind::Lambda]);
        assert_eq!(report.kinds[0].invoker, InvokerKind::InstanceMethod);
        assert_eq!(report.kinds[1].invoker, InvokerKind::Closure);
        for kind in &report.kinds {
            assert_eq!(kind.rows.len(), Strategy::ALL.len());
            assert!(
                kind.rows
                    .windows(2)
                    .all(|pair| pair[0].diff_secs <= pair[1].diff_secs)
            );
        }
    }

    #[test]
    fn test_collect_report_defaults_to_all_kinds() {
        let executor = CommandExecutor::new(AppConfig::default());
        let config = BenchConfig::builder().iterations(1).average_over(1).build();

        let report = executor.collect_report(config, &[], false).unwrap();
        assert_eq!(report.kinds.len(), TargetKind::ALL.len());
        assert_eq!(report.config, config);
    }

    #[test]
    fn test_run_bench_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let executor = CommandExecutor::new(AppConfig::default());
        let config = BenchConfig::builder().iterations(1).average_over(1).build();

        executor
            .run_bench(
                config,
                &[TargetKind::Function],
                Some(OutputFormat::Json),
                Some(&path),
                false,
            )
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["kinds"][0]["kind"], "function");
        assert_eq!(value["kinds"][0]["invoker"], "function");
    }
}
