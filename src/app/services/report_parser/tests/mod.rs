//! Test fixtures and shared helpers for report parser tests

mod curve_table_tests;
mod numeric_tests;

/// A complete synthetic report export covering every section the parser
/// understands: result metadata, both process value tables, five criteria
/// (one disabled), and a ten-sample curve
pub fn sample_report() -> String {
    r#"Test report export
Result information
Date;24.06.2025
Time;14:32:11
Total result;OK
Part serial number;PSN-000451
Measuring program name;PressFit M8
Operator;line 3

Process values - curve related
Force max;512,3;N;Displacement max;12,00;mm
Work;1,84;J;;;

Process values - EO related
Result;Entry;Exit
EO-01;3,2;7,9
EO-02;1,0;2,0

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
"#
    .to_string()
}

/// The same export truncated before the measuring curve section
pub fn sample_report_without_curve() -> String {
    let full = sample_report();
    match full.find("Measuring curve") {
        Some(offset) => full[..offset].to_string(),
        None => full,
    }
}
