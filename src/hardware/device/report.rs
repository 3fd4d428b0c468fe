//! SMART report rendering
//!
//! Fixed-width text table of the raw attribute table with the decoded
//! physical value of every attribute the catalog knows how to convert.

use crate::domain::ports::{RawAttributeRecord, RawThresholdRecord};
use crate::hardware::smart::catalog::AttributeCatalog;
use std::fmt::Write;

const UNKNOWN_ATTRIBUTE: &str = "Unknown";
const MISSING: &str = "-";

/// Render the attribute table.
///
/// Rows stop at the end-of-table marker. When an identifier repeats in
/// the catalog or the threshold table, the last entry describes the row. An empty record slice renders as
/// an empty string. Conversions run with default parameters.
pub fn build_report(
    catalog: &AttributeCatalog,
    records: &[RawAttributeRecord],
    thresholds: &[RawThresholdRecord],
) -> String {
    let mut report = String::new();
    if records.is_empty() {
        return report;
    }

    push_row(
        &mut report,
        ["ID", "Description", "Raw Value", "Worst", "Value", "Thres", "Physical"],
    );

    for record in records.iter().take_while(|r| !r.is_end_marker()) {
        // Later threshold entries override earlier ones
        let threshold = thresholds
            .iter()
            .rev()
            .find(|t| t.identifier == record.identifier)
            .map(|t| t.threshold.to_string());

        // Later catalog entries override earlier ones, as thresholds do
        let attribute = catalog.find_last(record.identifier);
        let description = attribute.map_or(UNKNOWN_ATTRIBUTE, |a| a.name);
        let physical = attribute
            .filter(|a| a.has_physical_conversion())
            .map(|a| a.convert(record, &[]).to_string());

        push_row(
            &mut report,
            [
                &format!("{:02X}", record.identifier),
                description,
                &hex_upper(&record.raw_value),
                &record.worst_value.to_string(),
                &record.current_value.to_string(),
                threshold.as_deref().unwrap_or(MISSING),
                physical.as_deref().unwrap_or(MISSING),
            ],
        );
    }

    report.push('\n');
    report
}

fn push_row(report: &mut String, columns: [&str; 7]) {
    let [id, description, raw, worst, value, threshold, physical] = columns;
    // Writing into a String cannot fail
    let _ = writeln!(
        report,
        " {:<3}{:<35}{:<13}{:<6}{:<6}{:<6}{:<8}",
        id, description, raw, worst, value, threshold, physical
    );
}

fn hex_upper(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
        let _ = write!(out, "{:02X}", b);
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::SensorType;
    use crate::hardware::smart::attribute::{Conversion, SmartAttribute};

    fn catalog() -> AttributeCatalog {
        AttributeCatalog::new(vec![
            SmartAttribute::new(0x01, "Read Error Rate"),
            SmartAttribute::new(0x09, "Power-On Hours").with_conversion(Conversion::RawU32),
            SmartAttribute::new(0xC2, "Temperature")
                .with_conversion(Conversion::Temperature { width: 1 })
                .with_sensor(SensorType::Temperature, 0),
        ])
    }

    fn record(identifier: u8, raw: [u8; 6], current: u8, worst: u8) -> RawAttributeRecord {
        RawAttributeRecord::new(identifier, raw, current, worst)
    }

    #[test]
    fn test_empty_records_give_empty_report() {
        assert_eq!(build_report(&catalog(), &[], &[]), "");
    }

    #[test]
    fn test_header_and_rows() {
        let records = [
            record(0x01, [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], 100, 99),
            record(0x09, [0x8C, 0x4E, 0x00, 0x00, 0x00, 0x00], 79, 79),
            record(0xC2, [0x23, 0x00, 0x12, 0x00, 0x2D, 0x00], 112, 98),
            record(0xFA, [0xAB, 0x00, 0x00, 0x00, 0x00, 0x00], 200, 200),
        ];
        let thresholds = [
            RawThresholdRecord {
                identifier: 0x01,
                threshold: 6,
            },
            RawThresholdRecord {
                identifier: 0x09,
                threshold: 0,
            },
        ];

        let report = build_report(&catalog(), &records, &thresholds);
        let lines: Vec<&str> = report.split('\n').collect();

        assert_eq!(
            lines[0],
            " ID Description                        Raw Value    Worst Value Thres Physical"
        );
        assert_eq!(
            lines[1],
            " 01 Read Error Rate                    000000000000 99    100   6     -       "
        );
        assert_eq!(
            lines[2],
            " 09 Power-On Hours                     8C4E00000000 79    79    0     20108   "
        );
        assert_eq!(
            lines[3],
            " C2 Temperature                        230012002D00 98    112   -     35      "
        );
        assert_eq!(
            lines[4],
            " FA Unknown                            AB0000000000 200   200   -     -       "
        );
        // Blank line closes the table
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_stops_at_end_marker() {
        let records = [
            record(0x09, [0x01, 0, 0, 0, 0, 0], 100, 100),
            record(0x00, [0; 6], 0, 0),
            record(0xC2, [0x23, 0, 0, 0, 0, 0], 100, 100),
        ];
        let report = build_report(&catalog(), &records, &[]);

        assert!(report.contains(" 09 "));
        assert!(!report.contains(" C2 "));
        assert!(!report.contains(" 00 "));
        // header + one row + blank line
        assert_eq!(report.lines().count(), 3);
    }

    #[test]
    fn test_last_threshold_wins() {
        let records = [record(0x01, [0; 6], 100, 100)];
        let thresholds = [
            RawThresholdRecord {
                identifier: 0x01,
                threshold: 6,
            },
            RawThresholdRecord {
                identifier: 0x01,
                threshold: 51,
            },
        ];
        let report = build_report(&catalog(), &records, &thresholds);
        assert!(report.contains("100   100   51    -"));
    }

    #[test]
    fn test_last_catalog_entry_describes_row() {
        let catalog = AttributeCatalog::new(vec![
            SmartAttribute::new(0xC2, "Temperature")
                .with_conversion(Conversion::Temperature { width: 1 })
                .with_sensor(SensorType::Temperature, 0),
            SmartAttribute::new(0xC2, "Airflow Temperature"),
        ]);
        let records = [record(0xC2, [0x23, 0, 0, 0, 0, 0], 100, 100)];

        let report = build_report(&catalog, &records, &[]);
        let row = report.lines().nth(1).unwrap();
        assert_eq!(
            row,
            " C2 Airflow Temperature                230000000000 100   100   -     -       "
        );
    }
}
