// BasketMiner - core/loader.rs
//
// Stage 1: parse a delimited transaction file into a TransactionTable.
//
// Fields are trimmed. Ragged rows, bad quoting, and invalid UTF-8 are all
// reported as LoadError::Csv; the run stops there.

use crate::core::model::TransactionTable;
use crate::util::constants;
use crate::util::error::LoadError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .flexible(false)
        .trim(csv::Trim::All);
    builder
}

/// Open `path` after checking its size against `MAX_INPUT_FILE_BYTES`.
fn open_checked(path: &Path) -> Result<File, LoadError> {
    let meta = std::fs::metadata(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    if meta.len() > constants::MAX_INPUT_FILE_BYTES {
        return Err(LoadError::FileTooLarge {
            path: path.to_path_buf(),
            size: meta.len(),
            max_size: constants::MAX_INPUT_FILE_BYTES,
        });
    }
    File::open(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load a transaction file from disk.
pub fn load_table(path: &Path) -> Result<TransactionTable, LoadError> {
    let file = open_checked(path)?;
    let table = read_table(file, path)?;
    tracing::info!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.row_count(),
        "Loaded transaction file"
    );
    Ok(table)
}

/// Parse delimited text from any reader. `source` is used only for error
/// messages.
pub fn read_table<R: Read>(reader: R, source: &Path) -> Result<TransactionTable, LoadError> {
    let mut csv_reader = reader_builder().from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| LoadError::Csv {
            path: source.to_path_buf(),
            source: e,
        })?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(LoadError::MissingHeader {
            path: source.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| LoadError::Csv {
            path: source.to_path_buf(),
            source: e,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    if rows.is_empty() {
        return Err(LoadError::NoRows {
            path: source.to_path_buf(),
        });
    }

    Ok(TransactionTable {
        source: source.to_path_buf(),
        headers,
        rows,
    })
}

/// Read only the header row of `path`.
///
/// Used by the GUI to offer column choices as soon as a file is picked,
/// without parsing the whole file.
pub fn read_headers(path: &Path) -> Result<Vec<String>, LoadError> {
    let file = open_checked(path)?;
    let mut csv_reader = reader_builder().from_reader(file);
    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| LoadError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(LoadError::MissingHeader {
            path: path.to_path_buf(),
        });
    }
    tracing::debug!(path = %path.display(), ?headers, "Read header row");
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(text: &str) -> Result<TransactionTable, LoadError> {
        read_table(text.as_bytes(), &PathBuf::from("inline.csv"))
    }

    #[test]
    fn test_reads_headers_and_rows() {
        let table = parse("TransactionNo,Items\n1,Bread\n1,Milk\n2,Bread\n").unwrap();
        assert_eq!(table.headers, vec!["TransactionNo", "Items"]);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.rows[1], vec!["1", "Milk"]);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let table = parse(" TransactionNo , Items \n 7 ,  Coffee \n").unwrap();
        assert_eq!(table.headers, vec!["TransactionNo", "Items"]);
        assert_eq!(table.rows[0], vec!["7", "Coffee"]);
    }

    #[test]
    fn test_quoted_item_with_comma() {
        let table = parse("TransactionNo,Items\n1,\"Jam, strawberry\"\n").unwrap();
        assert_eq!(table.rows[0][1], "Jam, strawberry");
    }

    #[test]
    fn test_ragged_row_is_csv_error() {
        let err = parse("TransactionNo,Items\n1,Bread\n2,Milk,Extra\n").unwrap_err();
        assert!(matches!(err, LoadError::Csv { .. }), "got {err:?}");
    }

    #[test]
    fn test_empty_input_has_no_header() {
        let err = parse("").unwrap_err();
        assert!(matches!(err, LoadError::MissingHeader { .. }), "got {err:?}");
    }

    #[test]
    fn test_header_only_has_no_rows() {
        let err = parse("TransactionNo,Items\n").unwrap_err();
        assert!(matches!(err, LoadError::NoRows { .. }), "got {err:?}");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_table(&PathBuf::from("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }), "got {err:?}");
    }
}
