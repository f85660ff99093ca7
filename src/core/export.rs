// BasketMiner - core/export.rs
//
// CSV and JSON export of mined association rules.
// Core layer: writes to any Write trait object.

use crate::core::model::{RuleRecord, RuleRow};
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export rule rows to CSV, in the order given.
///
/// Writes: Combination, Support, Confidence
pub fn export_csv<W: Write>(
    rows: &[RuleRow],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let csv_err = |e| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Combination", "Support", "Confidence"])
        .map_err(csv_err)?;

    let mut count = 0;
    for row in rows {
        csv_writer
            .write_record([
                row.combination.as_str(),
                &row.support.to_string(),
                &row.confidence.to_string(),
            ])
            .map_err(csv_err)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %export_path.display(), rules = count, "Exported rules to CSV");
    Ok(count)
}

/// Export full rule records to JSON format (array of objects).
pub fn export_json<W: Write>(
    records: &[RuleRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, records).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(
        path = %export_path.display(),
        rules = records.len(),
        "Exported rules to JSON"
    );
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn make_row(combination: &str, support: f64, confidence: f64) -> RuleRow {
        RuleRow {
            combination: combination.to_string(),
            support,
            confidence,
        }
    }

    #[test]
    fn test_csv_export() {
        let rows = vec![
            make_row("milk -> bread", 0.5, 1.0),
            make_row("bread, jam -> butter", 0.25, 0.75),
        ];
        let mut buf = Vec::new();
        let count = export_csv(&rows, &mut buf, &PathBuf::from("out.csv")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Combination,Support,Confidence");
        assert_eq!(lines[1], "milk -> bread,0.5,1");
        // Comma inside the combination forces quoting.
        assert_eq!(lines[2], "\"bread, jam -> butter\",0.25,0.75");
    }

    #[test]
    fn test_csv_export_empty_writes_header_only() {
        let mut buf = Vec::new();
        let count = export_csv(&[], &mut buf, &PathBuf::from("out.csv")).unwrap();
        assert_eq!(count, 0);
        assert_eq!(String::from_utf8(buf).unwrap(), "Combination,Support,Confidence\n");
    }

    #[test]
    fn test_json_export() {
        let records = vec![RuleRecord {
            antecedents: vec!["milk".to_string()],
            consequents: vec!["bread".to_string()],
            combination: "milk -> bread".to_string(),
            antecedent_support: 0.5,
            consequent_support: 1.0,
            support: 0.5,
            confidence: 1.0,
            lift: 1.0,
            leverage: 0.0,
            conviction: None,
        }];
        let mut buf = Vec::new();
        let count = export_json(&records, &mut buf, &PathBuf::from("out.json")).unwrap();
        assert_eq!(count, 1);

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["combination"], "milk -> bread");
        assert_eq!(value[0]["antecedents"][0], "milk");
        assert!(value[0]["conviction"].is_null());
    }
}
