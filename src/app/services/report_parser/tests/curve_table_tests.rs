//! Tests for measuring curve extraction

use super::{sample_report, sample_report_without_curve};
use crate::app::services::report_parser::curve_table::parse;
use crate::app::services::report_parser::stats::ParseStats;

#[test]
fn test_curve_from_sample_report() {
    let mut stats = ParseStats::new();
    let curve = parse(&sample_report(), &mut stats);

    assert_eq!(curve.len(), 10);
    assert_eq!(curve.x().len(), curve.y().len());
    assert_eq!(curve.x()[0], 0.0);
    assert_eq!(curve.y()[2], 161.0);
    assert_eq!(curve.x()[9], 12.0);
    assert_eq!(stats.curve_samples, 10);
    assert_eq!(stats.curve_rows_skipped, 0);
}

#[test]
fn test_missing_marker_yields_empty_curve() {
    let mut stats = ParseStats::new();
    let curve = parse(&sample_report_without_curve(), &mut stats);
    assert!(curve.is_empty());
}

#[test]
fn test_missing_signature_yields_empty_curve() {
    let mut stats = ParseStats::new();
    let content = "Measuring curve\n0,000;1,25;85,4;1,25\n";
    let curve = parse(content, &mut stats);
    assert!(curve.is_empty());
}

#[test]
fn test_malformed_rows_are_skipped_without_aborting() {
    let mut stats = ParseStats::new();
    let content = "Measuring curve\ns;mm;N;mm\n\
                   0,000;1,00;10,0;1,00\n\
                   0,004;bad;20,0;2,00\n\
                   0,008;3,00;30,0;3,00\n";
    let curve = parse(content, &mut stats);

    assert_eq!(curve.len(), 2);
    assert_eq!(curve.x(), &[1.0, 3.0]);
    assert_eq!(curve.y(), &[10.0, 30.0]);
    assert_eq!(stats.curve_rows_skipped, 1);
}

#[test]
fn test_rows_with_too_few_fields_are_skipped() {
    let mut stats = ParseStats::new();
    let content = "Measuring curve\ns;mm;N;mm\n0,000;1,00\n0,004;2,00;20,0\n";
    let curve = parse(content, &mut stats);

    assert_eq!(curve.len(), 1);
    assert_eq!(curve.x(), &[2.0]);
    assert_eq!(stats.curve_rows_skipped, 1);
}

#[test]
fn test_file_order_is_preserved() {
    let mut stats = ParseStats::new();
    let content = "Measuring curve\ns;mm;N;mm\n0;5,0;50,0\n0;1,0;10,0\n0;3,0;30,0\n";
    let curve = parse(content, &mut stats);

    assert_eq!(curve.x(), &[5.0, 1.0, 3.0]);
    assert_eq!(curve.y(), &[50.0, 10.0, 30.0]);
}

#[test]
fn test_signature_before_marker_is_ignored() {
    let mut stats = ParseStats::new();
    let content = "s;mm;N;mm\n0;9,0;90,0\nMeasuring curve\ns;mm;N;mm\n0;1,0;10,0\n";
    let curve = parse(content, &mut stats);

    assert_eq!(curve.len(), 1);
    assert_eq!(curve.x(), &[1.0]);
}
