//! Integration tests for the report parser with a complete synthetic export
//!
//! Exercises the public API end-to-end: file reading, section extraction,
//! criterion evaluation, and the JSON wire shape of the evaluated record.

use kistler_processor::{ReportParser, Verdict};

const SAMPLE_REPORT: &str = r#"Test report export
Result information
Date;24.06.2025
Time;14:32:11
Total result;OK
Part serial number;PSN-000451
Measuring program name;PressFit M8

Process values - curve related
Force max;512,3;N;Displacement max;12,00;mm

Process values - EO related
Result;Entry;Exit
EO-01;3,2;7,9

Evaluation objects settings;Reaction;XMin;XMax;YMin;YMax;X-Reference;Y-Reference
EO-01;LINE-X;2,0;8,0;150,0;;;
EO-02;NO-PASS;0,0;12,0;;600,0;;
EO-03;OFF;1,0;2,0;3,0;4,0;;
EO-04;LINE-Y;;;100,0;400,0;6,0;
EO-05;MIN-MAX;5,0;7,0;200,0;300,0;;

Measuring curve
s;mm;N;mm
0,000;0,00;0,0;0,00
0,004;1,25;85,4;1,25
0,008;2,50;161,0;2,50
0,012;3,75;198,7;3,75
0,016;5,00;221,4;5,00
0,020;6,00;250,0;6,00
0,024;7,50;310,2;7,50
0,028;9,00;402,8;9,00
0,032;10,50;481,5;10,50
0,036;12,00;540,6;12,00
"#;

#[test]
fn test_parse_file_end_to_end() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let report_path = temp_dir.path().join("run_0042.csv");
    std::fs::write(&report_path, SAMPLE_REPORT).unwrap();

    let outcome = ReportParser::new()
        .parse_file(&report_path)
        .expect("report file should parse");
    let report = &outcome.report;

    assert_eq!(report.total_result(), "OK");
    assert_eq!(report.result_info["Entry"], "3.2");
    assert_eq!(report.evaluation_objects.len(), 4);
    assert_eq!(report.measuring_curve.len(), 10);

    // Disabled criteria never appear
    assert!(
        report
            .evaluation_objects
            .iter()
            .all(|o| o.identifier != "EO-03")
    );

    // Every configured rule passes against this curve
    for object in &report.evaluation_objects {
        assert_eq!(
            object.evaluation.result,
            Verdict::Ok,
            "{} should pass: {}",
            object.identifier,
            object.evaluation.reason
        );
    }
}

#[test]
fn test_curve_sequences_always_have_equal_length() {
    let inputs = [
        SAMPLE_REPORT.to_string(),
        String::new(),
        "Measuring curve\ns;mm;N;mm\n0;1,0;bad\n0;2,0;20,0\n".to_string(),
        SAMPLE_REPORT.replace("s;mm;N;mm", "other;header"),
    ];

    for input in inputs {
        let outcome = ReportParser::new().parse_str(&input);
        assert_eq!(
            outcome.report.measuring_curve.x().len(),
            outcome.report.measuring_curve.y().len()
        );
    }
}

#[test]
fn test_json_record_uses_export_wire_keys() {
    let outcome = ReportParser::new().parse_str(SAMPLE_REPORT);
    let json = serde_json::to_value(&outcome.report).unwrap();

    assert_eq!(json["result_info"]["Total result"], "OK");
    assert_eq!(json["result_info"]["Entry"], "3.2");

    let first = &json["evaluation_objects"][0];
    assert_eq!(first["EO_Identifier"], "EO-01");
    assert_eq!(first["Reaction"], "LINE-X");
    assert_eq!(first["XMin_num"], 2.0);
    assert_eq!(first["evaluation_result"], "OK");
    assert_eq!(first["x_cross"], 2.5);
    assert_eq!(first["y_cross"], 161.0);

    let curve = &json["measuring_curve"];
    assert_eq!(curve["X"].as_array().unwrap().len(), 10);
    assert_eq!(curve["Y"].as_array().unwrap().len(), 10);

    let process_values = &json["process_values_curve_related"];
    assert_eq!(process_values["Force max"]["value"], 512.3);
    assert_eq!(process_values["Force max"]["unit"], "N");
}

#[test]
fn test_missing_sections_degrade_to_defaults() {
    let outcome = ReportParser::new().parse_str("not a report at all\n");
    let report = &outcome.report;

    for key in [
        "Date",
        "Time",
        "Total result",
        "Part serial number",
        "Measuring program name",
        "Entry",
    ] {
        assert_eq!(report.result_info[key], "N/A", "key {key} should default");
    }
    assert!(report.process_values_curve_related.is_none());
    assert!(report.evaluation_objects.is_empty());
    assert!(report.measuring_curve.is_empty());
}

#[test]
fn test_empty_curve_turns_all_verdicts_unknown() {
    let truncated = &SAMPLE_REPORT[..SAMPLE_REPORT.find("Measuring curve").unwrap()];
    let outcome = ReportParser::new().parse_str(truncated);

    assert_eq!(outcome.report.evaluation_objects.len(), 4);
    for object in &outcome.report.evaluation_objects {
        assert_eq!(object.evaluation.result, Verdict::Unknown);
        assert_eq!(object.evaluation.reason, "No curve data to evaluate");
    }
}

#[test]
fn test_repeated_parsing_is_deterministic() {
    let parser = ReportParser::new();
    let first = serde_json::to_value(&parser.parse_str(SAMPLE_REPORT).report).unwrap();
    let second = serde_json::to_value(&parser.parse_str(SAMPLE_REPORT).report).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unreadable_file_is_the_only_hard_failure() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.csv");

    let result = ReportParser::new().parse_file(&missing);
    assert!(result.is_err());

    // Whereas arbitrary garbage content still parses to a degraded record
    let garbage = temp_dir.path().join("garbage.csv");
    std::fs::write(&garbage, ";;;\u{fffd};;\n\n;;;").unwrap();
    assert!(ReportParser::new().parse_file(&garbage).is_ok());
}
