//! Shared plumbing for reading one year's delimited extract: locating the file,
//! checking the header for the required columns and turning each record into a
//! typed row with its line number attached to any failure.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{ProcessingError, Result};
use crate::models::Dataset;
use crate::utils::constants::{DATE_FORMAT, TIME_FORMAT};

/// Where a set of rows comes from; carried into every error.
#[derive(Debug, Clone, Copy)]
pub struct ExtractSource<'a> {
    pub dataset: Dataset,
    pub year: i32,
    pub path: &'a Path,
}

impl<'a> ExtractSource<'a> {
    pub fn new(dataset: Dataset, year: i32, path: &'a Path) -> Self {
        Self {
            dataset,
            year,
            path,
        }
    }

    fn missing_column(&self, column: &str) -> ProcessingError {
        ProcessingError::MissingColumn {
            dataset: self.dataset,
            year: self.year,
            path: self.path.to_path_buf(),
            column: column.to_string(),
        }
    }

    fn malformed(&self, line: u64, reason: impl Into<String>) -> ProcessingError {
        ProcessingError::MalformedRecord {
            dataset: self.dataset,
            year: self.year,
            path: self.path.to_path_buf(),
            line,
            reason: reason.into(),
        }
    }
}

/// Open the extract and verify its header, returning the reader positioned at
/// the first record together with the header row.
pub fn open_extract(
    source: &ExtractSource<'_>,
    required: &[&str],
) -> Result<(Reader<File>, StringRecord)> {
    let file = File::open(source.path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ProcessingError::MissingFile {
            dataset: source.dataset,
            year: source.year,
            path: source.path.to_path_buf(),
        },
        _ => ProcessingError::Io(e),
    })?;

    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(file);
    let headers = reader
        .headers()
        .map_err(|e| source.malformed(1, format!("unreadable header: {}", e)))?
        .clone();

    if let Some(column) = required.iter().find(|c| !headers.iter().any(|h| h == **c)) {
        return Err(source.missing_column(column));
    }

    Ok((reader, headers))
}

/// Check that the extract exists and carries the required header, without
/// reading any records.
pub fn inspect_extract(source: &ExtractSource<'_>, required: &[&str]) -> Result<()> {
    open_extract(source, required).map(|_| ())
}

/// Read every record of the extract as `R`, then convert it with `convert`.
///
/// Unknown columns are ignored. Deserialization and conversion failures both
/// surface as `MalformedRecord` with the record's line number.
pub fn read_extract<R, T, F>(
    source: &ExtractSource<'_>,
    required: &[&str],
    mut convert: F,
) -> Result<Vec<T>>
where
    R: DeserializeOwned,
    F: FnMut(R) -> std::result::Result<T, String>,
{
    let (mut reader, headers) = open_extract(source, required)?;
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            source.malformed(line, e.to_string())
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let raw: R = record
            .deserialize(Some(&headers))
            .map_err(|e| source.malformed(line, e.to_string()))?;
        rows.push(convert(raw).map_err(|reason| source.malformed(line, reason))?);
    }

    Ok(rows)
}

/// Combine the `Date GMT` and `Time GMT` columns.
pub fn parse_timestamp(date: &str, time: &str) -> std::result::Result<NaiveDateTime, String> {
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| format!("invalid Date GMT: '{}'", date))?;
    let time = NaiveTime::parse_from_str(time, TIME_FORMAT)
        .map_err(|_| format!("invalid Time GMT: '{}'", time))?;
    Ok(date.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[derive(Debug, Deserialize)]
    struct Pair {
        #[serde(rename = "A")]
        a: u32,
        #[serde(rename = "B")]
        b: String,
    }

    fn source(path: &Path) -> ExtractSource<'_> {
        ExtractSource::new(Dataset::Reference, 1991, path)
    }

    #[test]
    fn test_parse_timestamp() {
        let ts = parse_timestamp("1991-03-04", "17:00").unwrap();
        assert_eq!(ts.to_string(), "1991-03-04 17:00:00");

        assert!(parse_timestamp("04/03/1991", "17:00").is_err());
        assert!(parse_timestamp("1991-03-04", "5pm").is_err());
    }

    #[test]
    fn test_read_extract_ignores_extra_columns() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "\"A\",\"Extra\",\"B\"")?;
        writeln!(file, "\"1\",\"x\",\"one\"")?;
        writeln!(file, "\"2\",\"y\",\"two\"")?;

        let rows: Vec<(u32, String)> =
            read_extract(&source(file.path()), &["A", "B"], |p: Pair| Ok((p.a, p.b)))?;

        assert_eq!(rows, vec![(1, "one".to_string()), (2, "two".to_string())]);
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("WIND_1991.csv");

        let err = inspect_extract(&source(&path), &["A"]).unwrap_err();
        assert!(matches!(err, ProcessingError::MissingFile { year: 1991, .. }));
    }

    #[test]
    fn test_missing_column_is_named() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "A,C")?;
        writeln!(file, "1,2")?;

        match inspect_extract(&source(file.path()), &["A", "B"]) {
            Err(ProcessingError::MissingColumn { column, .. }) => assert_eq!(column, "B"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_unparsable_value_reports_line() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "A,B")?;
        writeln!(file, "1,one")?;
        writeln!(file, "CC,two")?;

        let err = read_extract(&source(file.path()), &["A", "B"], |p: Pair| Ok(p.a)).unwrap_err();
        match err {
            ProcessingError::MalformedRecord { line, .. } => assert_eq!(line, 3),
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_header_only_file_yields_no_rows() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "A,B")?;

        let rows = read_extract(&source(file.path()), &["A", "B"], |p: Pair| Ok(p.a))?;
        assert!(rows.is_empty());
        Ok(())
    }
}
