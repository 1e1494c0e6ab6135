//! End-to-end runs over synthetic `.grm` files.

use gm_analysis::{AnalysisConfig, FieldValue, FileOutcome, analyze_batch, analyze_bytes};
use gm_record::{ByteOrder, encode_components};
use proptest::prelude::*;
use std::f64::consts::PI;

fn encode_x(x_cmps2: &[f32]) -> Vec<u8> {
    encode_components(x_cmps2, &vec![0.0; x_cmps2.len()], ByteOrder::Little).unwrap()
}

fn pulse() -> Vec<f32> {
    (0..1000)
        .map(|i| if (450..550).contains(&i) { 981.0 } else { 0.0 })
        .collect()
}

#[test]
fn rectangular_pulse_window() {
    let r = analyze_bytes("pulse.grm", &encode_x(&pulse()), &AnalysisConfig::default()).unwrap();

    assert_eq!(r.peak_accel_g, 1.0);
    assert!((r.sampling_frequency_hz - 100.0).abs() < 1e-6);
    // ∫(9.81 a)² dt = 9.81² over one second of 1 g
    assert!((r.arias_total - PI * 9.81 / 2.0).abs() < 1e-9);

    let w = r.unfiltered;
    assert!((w.t5 - 4.545).abs() < 1e-9, "t5 = {}", w.t5);
    assert!((w.t95 - 5.445).abs() < 1e-9, "t95 = {}", w.t95);
    assert!((w.duration - 0.9).abs() < 1e-9);

    assert_eq!(r.periods.len(), 6);
    for p in &r.periods {
        let pw = p.duration_window;
        assert!(pw.t5 <= pw.t95, "T = {}", p.period_s);
        assert!(p.filtered_total_energy > 0.0);
    }
}

#[test]
fn silent_record_is_degenerate_everywhere() {
    let cfg = AnalysisConfig::default();
    let r = analyze_bytes("quiet.grm", &encode_x(&[0.0; 500]), &cfg).unwrap();
    assert_eq!(r.arias_total, 0.0);
    assert!(r.unfiltered.is_degenerate());
    assert!(r.periods.iter().all(|p| p.duration_window.is_degenerate()));
    assert!(r.periods.iter().all(|p| p.filtered_total_energy == 0.0));
}

#[test]
fn flat_record_columns() {
    let r = analyze_bytes("pulse.grm", &encode_x(&pulse()), &AnalysisConfig::default()).unwrap();
    let flat = r.to_flat_record();
    assert_eq!(flat.len(), 7 + 4 * 6);

    let names: Vec<&str> = flat.column_names().collect();
    assert_eq!(
        &names[..11],
        &[
            "filename",
            "peak_accel_g",
            "total_duration_s",
            "arias_total_ms",
            "duration_5_95_unfiltered_s",
            "t5_unfiltered_s",
            "t95_unfiltered_s",
            "duration_5_95_T0.1s",
            "t5_T0.1s",
            "t95_T0.1s",
            "arias_filtered_T0.1",
        ]
    );
    assert_eq!(names.last(), Some(&"arias_filtered_T3.0"));
    assert_eq!(
        flat.get("filename"),
        Some(&FieldValue::Text("pulse.grm".to_string()))
    );
    assert_eq!(flat.get("peak_accel_g").and_then(FieldValue::as_f64), Some(1.0));

    let json = serde_json::to_value(&flat).unwrap();
    assert_eq!(json["filename"], "pulse.grm");
    let d1 = flat.get("duration_5_95_T1.0s").and_then(FieldValue::as_f64);
    assert_eq!(json["duration_5_95_T1.0s"].as_f64(), d1);
}

#[test]
fn batch_keeps_input_order_and_skips_bad_files() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("a_good.grm");
    let truncated = dir.path().join("b_truncated.grm");
    let missing = dir.path().join("c_missing.grm");
    let quiet = dir.path().join("d_quiet.grm");

    std::fs::write(&good, encode_x(&pulse())).unwrap();
    let mut bytes = encode_x(&pulse());
    bytes.truncate(bytes.len() - 8);
    std::fs::write(&truncated, bytes).unwrap();
    std::fs::write(&quiet, encode_x(&[0.0; 300])).unwrap();

    let paths = vec![quiet, truncated, good, missing];
    let report = analyze_batch(&paths, &AnalysisConfig::default()).unwrap();

    let names: Vec<&str> = report.outcomes.iter().map(FileOutcome::filename).collect();
    assert_eq!(
        names,
        vec!["d_quiet.grm", "b_truncated.grm", "a_good.grm", "c_missing.grm"]
    );

    let skipped: Vec<(&str, &str)> = report.skipped().collect();
    assert_eq!(skipped.len(), 2);
    assert_eq!(skipped[0].0, "b_truncated.grm");
    assert!(skipped[0].1.contains("Truncated payload"));
    assert_eq!(skipped[1].0, "c_missing.grm");

    let summary = report.summary();
    assert_eq!(summary.files_analyzed, 2);
    assert_eq!(summary.files_skipped, 2);
    assert_eq!(summary.period_means.len(), 6);
    assert_eq!(report.flat_records().len(), 2);
}

#[test]
fn single_sample_file_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let one = dir.path().join("one.grm");
    std::fs::write(&one, encode_x(&[981.0])).unwrap();

    let report = analyze_batch(&[one], &AnalysisConfig::default()).unwrap();
    let skipped: Vec<_> = report.skipped().collect();
    assert_eq!(skipped.len(), 1);
    assert!(skipped[0].1.contains("at least 2"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn windows_lie_inside_the_record(
        samples in prop::collection::vec(-500.0f32..500.0, 64..256),
    ) {
        let cfg = AnalysisConfig {
            periods_s: vec![0.1, 0.5],
            ..AnalysisConfig::default()
        };
        let r = analyze_bytes("p.grm", &encode_x(&samples), &cfg).unwrap();
        let end = r.total_duration_s;

        let windows = std::iter::once(r.unfiltered)
            .chain(r.periods.iter().map(|p| p.duration_window));
        for w in windows {
            prop_assert!(w.t5 >= 0.0);
            prop_assert!(w.t5 <= w.t95);
            prop_assert!(w.t95 <= end + 1e-9);
            prop_assert!((w.duration - (w.t95 - w.t5)).abs() < 1e-12);
        }
        prop_assert!(r.arias_total >= 0.0);
    }
}
