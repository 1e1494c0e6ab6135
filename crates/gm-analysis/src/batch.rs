//! Multi-file runs: every file is analyzed independently, failures become
//! skips, and outcomes stay in input order.

use crate::config::AnalysisConfig;
use crate::error::AnalysisResult;
use crate::orchestrator::{analyze_file, display_name};
use crate::result::{FileAnalysisResult, FlatRecord};
use gm_core::timing::Timer;
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Analyzed(FileAnalysisResult),
    Skipped { filename: String, reason: String },
}

impl FileOutcome {
    pub fn filename(&self) -> &str {
        match self {
            FileOutcome::Analyzed(r) => &r.filename,
            FileOutcome::Skipped { filename, .. } => filename,
        }
    }

    pub fn result(&self) -> Option<&FileAnalysisResult> {
        match self {
            FileOutcome::Analyzed(r) => Some(r),
            FileOutcome::Skipped { .. } => None,
        }
    }
}

/// Outcomes of a batch run, one per input path, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn results(&self) -> impl Iterator<Item = &FileAnalysisResult> {
        self.outcomes.iter().filter_map(FileOutcome::result)
    }

    /// `(filename, reason)` for every skipped file.
    pub fn skipped(&self) -> impl Iterator<Item = (&str, &str)> {
        self.outcomes.iter().filter_map(|o| match o {
            FileOutcome::Skipped { filename, reason } => Some((filename.as_str(), reason.as_str())),
            FileOutcome::Analyzed(_) => None,
        })
    }

    pub fn flat_records(&self) -> Vec<FlatRecord> {
        self.results().map(FileAnalysisResult::to_flat_record).collect()
    }

    pub fn summary(&self) -> BatchSummary {
        let results: Vec<&FileAnalysisResult> = self.results().collect();
        let files_analyzed = results.len();
        let files_skipped = self.outcomes.len() - files_analyzed;

        let mean = |values: Vec<f64>| -> Option<f64> {
            if values.is_empty() {
                None
            } else {
                Some(values.iter().sum::<f64>() / values.len() as f64)
            }
        };

        // Period columns follow the first analyzed file; every file in a
        // batch shares one config, so the sets agree.
        let period_means: Vec<PeriodMean> = results
            .first()
            .map(|first| {
                first
                    .periods
                    .iter()
                    .map(|p| PeriodMean {
                        period_s: p.period_s,
                        mean_duration_s: mean(
                            results
                                .iter()
                                .filter_map(|r| r.period(p.period_s))
                                .map(|q| q.duration_window.duration)
                                .collect(),
                        ),
                    })
                    .collect()
            })
            .unwrap_or_default();

        BatchSummary {
            files_analyzed,
            files_skipped,
            mean_peak_accel_g: mean(results.iter().map(|r| r.peak_accel_g).collect()),
            mean_unfiltered_duration_s: mean(
                results.iter().map(|r| r.unfiltered.duration).collect(),
            ),
            period_means,
        }
    }
}

/// Aggregate statistics over the analyzed files of a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub files_analyzed: usize,
    pub files_skipped: usize,
    pub mean_peak_accel_g: Option<f64>,
    pub mean_unfiltered_duration_s: Option<f64>,
    pub period_means: Vec<PeriodMean>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodMean {
    pub period_s: f64,
    pub mean_duration_s: Option<f64>,
}

/// Analyze every path. The config is validated once up front; after that a
/// failing file never aborts the run, it is reported as skipped.
pub fn analyze_batch<P>(paths: &[P], config: &AnalysisConfig) -> AnalysisResult<BatchReport>
where
    P: AsRef<Path> + Sync,
{
    config.validate()?;
    let timer = Timer::start("analyze_batch");

    let outcomes: Vec<FileOutcome> = paths
        .par_iter()
        .map(|p| {
            let path = p.as_ref();
            match analyze_file(path, config) {
                Ok(result) => FileOutcome::Analyzed(result),
                Err(e) => {
                    let filename = display_name(path);
                    tracing::warn!(file = %path.display(), error = %e, "skipping record");
                    FileOutcome::Skipped {
                        filename,
                        reason: e.to_string(),
                    }
                }
            }
        })
        .collect();

    let report = BatchReport { outcomes };
    tracing::info!(
        analyzed = report.results().count(),
        skipped = report.skipped().count(),
        "batch complete"
    );
    timer.stop_and_log();
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gm_signal::DurationWindow;

    fn analyzed(name: &str, peak: f64, duration: f64) -> FileOutcome {
        FileOutcome::Analyzed(FileAnalysisResult {
            filename: name.to_string(),
            sample_count: 10,
            sampling_frequency_hz: 100.0,
            peak_accel_g: peak,
            total_duration_s: 0.09,
            arias_total: 1.0,
            unfiltered: DurationWindow {
                t5: 0.0,
                t95: duration,
                duration,
            },
            periods: Vec::new(),
        })
    }

    #[test]
    fn summary_means_skip_failed_files() {
        let report = BatchReport {
            outcomes: vec![
                analyzed("a.grm", 0.2, 4.0),
                FileOutcome::Skipped {
                    filename: "b.grm".into(),
                    reason: "truncated".into(),
                },
                analyzed("c.grm", 0.4, 6.0),
            ],
        };
        let s = report.summary();
        assert_eq!(s.files_analyzed, 2);
        assert_eq!(s.files_skipped, 1);
        assert!((s.mean_peak_accel_g.unwrap() - 0.3).abs() < 1e-12);
        assert_eq!(s.mean_unfiltered_duration_s, Some(5.0));
        assert!(s.period_means.is_empty());

        let skipped: Vec<_> = report.skipped().collect();
        assert_eq!(skipped, vec![("b.grm", "truncated")]);
        assert_eq!(report.flat_records().len(), 2);
    }

    #[test]
    fn empty_report_has_no_means() {
        let s = BatchReport::default().summary();
        assert_eq!(s.files_analyzed, 0);
        assert_eq!(s.mean_peak_accel_g, None);
    }

    #[test]
    fn invalid_config_is_rejected_before_any_file() {
        let cfg = AnalysisConfig {
            periods_s: vec![-1.0],
            ..AnalysisConfig::default()
        };
        let paths: [&str; 0] = [];
        assert!(analyze_batch(&paths, &cfg).is_err());
    }
}
