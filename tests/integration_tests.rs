//! Integration Tests
//!
//! End-to-end tests for unit conversion, log volume and sheet totals.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use ghanfoot::cli::commands;
use ghanfoot::cli::Commands;
use ghanfoot::units::{parse_or_zero, to_centimeters, to_meters, Unit};
use ghanfoot::volume::{compute_detailed, compute_formatted, to_fixed, total_volume};
use ghanfoot::{LogEntry, LogField, LogSheet};
use std::io::Write;
use tempfile::tempdir;

fn entry(length: &str, circumference: &str, length_unit: &str, circumference_unit: &str) -> LogEntry {
    LogEntry::new(
        length,
        circumference,
        Unit::from_tag(length_unit),
        Unit::from_tag(circumference_unit),
    )
}

// === Unit Conversion ===

#[test]
fn test_conversion_reference_values() {
    assert_relative_eq!(to_meters(100.0, Unit::from_tag("cm")), 1.0);
    assert_relative_eq!(to_meters(1.0, Unit::from_tag("ft")), 0.3048);
    assert_relative_eq!(to_meters(1.0, Unit::from_tag("in")), 0.0254);
    assert_relative_eq!(to_centimeters("1", Unit::from_tag("m")), 100.0);
    assert_eq!(to_centimeters("abc", Unit::from_tag("cm")), 0.0);
}

#[test]
fn test_meter_conversion_is_identity() {
    for x in [0.0, 0.3, 17.0, -4.2, 1234567.891] {
        assert_eq!(to_meters(x, Unit::Meter), x);
    }
}

#[test]
fn test_unknown_tag_never_fails() {
    let unit = Unit::from_tag("cubit");
    assert_eq!(to_meters(5.0, unit), 5.0);
    assert_eq!(to_centimeters("5", unit), 5.0);
    assert_eq!(compute_formatted("1", "100", unit, unit), "0.0625");
}

// === Log Volume ===

#[test]
fn test_reference_log() {
    assert_eq!(
        compute_formatted("1", "100", Unit::Meter, Unit::Centimeter),
        "0.0625"
    );

    let result = compute_detailed("1", "100", Unit::Meter, Unit::Centimeter);
    assert_relative_eq!(result.individual, 0.0625);
    assert_abs_diff_eq!(result.final_volume, 2.2072, epsilon = 1e-4);
}

#[test]
fn test_missing_length_short_circuits() {
    assert_eq!(
        compute_formatted("", "10", Unit::Meter, Unit::Centimeter),
        "0.00"
    );
    let result = compute_detailed("", "10", Unit::Meter, Unit::Centimeter);
    assert_eq!(result.individual, 0.0);
    assert_eq!(result.final_volume, 0.0);
}

#[test]
fn test_imperial_log() {
    // 12 ft long, 48 in around
    let result = compute_detailed("12", "48", Unit::Foot, Unit::Inch);
    let length_m = 12.0 * 0.3048;
    let circumference_cm = 48.0 * 2.54;
    let expected = length_m * circumference_cm * circumference_cm / 160.0 / 1000.0;

    assert_relative_eq!(result.individual, expected, max_relative = 1e-12);
    assert_relative_eq!(result.final_volume, expected * 35.315, max_relative = 1e-12);
}

#[test]
fn test_partial_typing_never_fails() {
    for text in ["", "-", ".", "1e", "1.", "abc", "  ", "NaN", "Infinity"] {
        let _ = compute_formatted(text, "100", Unit::Meter, Unit::Centimeter);
        let _ = compute_detailed("1", text, Unit::Meter, Unit::Centimeter);
        let _ = parse_or_zero(text);
    }
}

// === Totals ===

#[test]
fn test_empty_total() {
    assert_eq!(total_volume(&[]), "0.00");
}

#[test]
fn test_single_log_total_matches_final() {
    let logs = [entry("1", "100", "m", "cm")];
    let result = compute_detailed("1", "100", Unit::Meter, Unit::Centimeter);

    assert_eq!(total_volume(&logs), "2.21");
    assert_eq!(to_fixed(result.final_volume, 2), total_volume(&logs));
}

#[test]
fn test_mixed_valid_and_blank_rows() {
    let logs = [
        entry("", "", "m", "cm"),
        entry("1", "100", "m", "cm"),
        entry("3", "", "ft", "in"),
        entry("", "50", "m", "cm"),
        entry("4", "120", "m", "cm"),
    ];
    assert_eq!(total_volume(&logs), "14.92");
}

#[test]
fn test_total_is_idempotent() {
    let logs = [entry("2.4", "130", "m", "cm"), entry("8", "50", "ft", "in")];
    let first = total_volume(&logs);
    let second = total_volume(&logs);
    assert_eq!(first, second);
}

// === Sheet Workflow ===

#[test]
fn test_sheet_editing_workflow() {
    let mut sheet = LogSheet::new();
    assert_eq!(sheet.total(), "0.00");

    sheet.set_field(0, LogField::Length, "1").unwrap();
    assert_eq!(sheet.total(), "0.00");
    sheet.set_field(0, LogField::Circumference, "100").unwrap();
    assert_eq!(sheet.total(), "2.21");

    let second = sheet.add_row();
    sheet.set_field(second, "length".parse().unwrap(), "4").unwrap();
    sheet.set_field(second, "circumference".parse().unwrap(), "120").unwrap();
    assert_eq!(sheet.total(), "14.92");

    sheet.remove_row(0).unwrap();
    assert_eq!(sheet.len(), 1);
    // 0.36 * 35.315 = 12.7134
    assert_eq!(sheet.total(), "12.71");

    // Last row cannot be removed
    assert!(sheet.remove_row(0).unwrap().is_none());
    assert_eq!(sheet.len(), 1);

    sheet.reset();
    assert_eq!(sheet, LogSheet::new());
}

#[test]
fn test_sheet_unit_change_updates_volume() {
    let mut sheet = LogSheet::new();
    sheet.set_field(0, LogField::Length, "100").unwrap();
    sheet.set_field(0, LogField::Circumference, "1").unwrap();
    sheet.set_field(0, LogField::LengthUnit, "cm").unwrap();
    sheet.set_field(0, LogField::CircumferenceUnit, "m").unwrap();

    assert_eq!(sheet.rows()[0].formatted_volume(), "0.0625");
    assert_eq!(sheet.total(), "2.21");
}

// === CLI ===

#[test]
fn test_total_command_reads_sheet_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sheet.json");

    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"[
            {{"length": "1", "circumference": "100", "lengthUnit": "m", "circumferenceUnit": "cm"}},
            {{"length": 4, "circumference": 120}},
            {{"length": "", "circumference": ""}}
        ]"#
    )
    .unwrap();

    let mut out = Vec::new();
    commands::run(Commands::Total { path, json: true }, &mut out).unwrap();

    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(report["total"], "14.92");
    assert_eq!(report["rows"].as_array().unwrap().len(), 3);
    assert_eq!(report["rows"][2]["final"].as_f64().unwrap(), 0.0);
}

#[test]
fn test_total_command_rejects_malformed_sheet() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut out = Vec::new();
    let err = commands::run(Commands::Total { path, json: false }, &mut out).unwrap_err();
    assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    assert!(!err.recovery_suggestions().is_empty());
}

#[test]
fn test_sheet_with_null_fields_still_totals() {
    let json = r#"[
        {"length": null, "circumference": "100", "lengthUnit": "m", "circumferenceUnit": "cm"},
        {"length": "1", "circumference": "100", "lengthUnit": null},
        {"length": "1", "circumference": "100"}
    ]"#;
    let sheet: LogSheet = serde_json::from_str(json).unwrap();

    assert_eq!(sheet.len(), 3);
    assert_eq!(sheet.rows()[0].length, "");
    assert_eq!(sheet.rows()[1].length_unit, Unit::Unrecognized);
    // Row 2 converts its length as identity, so it matches row 3
    assert_eq!(sheet.total(), "4.41");
}
