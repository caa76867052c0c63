use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::{Roster, RosterEntry};
use crate::utils::constants::{
    ROSTER_META_COLUMNS, ROSTER_REFERENCE_CHANNEL_COLUMN, ROSTER_STATION_COLUMNS,
};
use crate::utils::filename::variable_channel_column;
use crate::writers::atomic::write_atomic;

/// Shortest text that reads back to the same value, keeping a trailing `.0`
/// on whole degrees.
fn format_coordinate(value: f64) -> String {
    format!("{:?}", value)
}

/// Serializes the roster as a delimited table: station key, both channels,
/// station metadata, then one column per configured year.
pub struct RosterWriter {
    variable_prefix: String,
    label_year_columns: bool,
}

impl RosterWriter {
    pub fn new(variable_prefix: &str) -> Self {
        Self {
            variable_prefix: variable_prefix.to_string(),
            label_year_columns: false,
        }
    }

    /// Label the year columns with the year instead of leaving them blank.
    pub fn with_year_labels(mut self, label_year_columns: bool) -> Self {
        self.label_year_columns = label_year_columns;
        self
    }

    pub fn header(&self, years: &[i32]) -> Vec<String> {
        let mut header: Vec<String> = ROSTER_STATION_COLUMNS.iter().map(|c| c.to_string()).collect();
        header.push(ROSTER_REFERENCE_CHANNEL_COLUMN.to_string());
        header.push(variable_channel_column(&self.variable_prefix));
        header.extend(ROSTER_META_COLUMNS.iter().map(|c| c.to_string()));
        header.extend(years.iter().map(|y| {
            if self.label_year_columns {
                y.to_string()
            } else {
                String::new()
            }
        }));
        header
    }

    pub fn record(entry: &RosterEntry) -> Vec<String> {
        let mut record = vec![
            entry.row.station.state_code.to_string(),
            entry.row.station.county_code.to_string(),
            entry.row.station.site_number.to_string(),
            entry.row.reference_channel.to_string(),
            entry.row.variable_channel.to_string(),
            format_coordinate(entry.meta.latitude),
            format_coordinate(entry.meta.longitude),
            entry.meta.state_name.clone(),
            entry.meta.county_name.clone(),
        ];
        record.extend(entry.markers.iter().map(|m| m.to_string()));
        record
    }

    pub fn write_to<W: Write>(&self, roster: &Roster, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(self.header(&roster.years))?;
        for entry in &roster.entries {
            csv_writer.write_record(Self::record(entry))?;
        }
        csv_writer.flush()?;

        Ok(())
    }

    /// Write the roster to `path`, replacing it only once the whole table is written.
    pub fn write(&self, roster: &Roster, path: &Path) -> Result<()> {
        write_atomic(path, |w| self.write_to(roster, w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InventoryRow, StationKey, StationMeta};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn roster() -> Roster {
        Roster {
            years: vec![1991, 1992],
            entries: vec![RosterEntry {
                row: InventoryRow::new(StationKey::new(6, 37, 1), 1, 5),
                meta: StationMeta::new(34.066, -118.227, "California".into(), "Los Angeles".into()),
                markers: vec![1991, 0],
            }],
        }
    }

    #[test]
    fn test_unlabeled_year_columns() -> Result<()> {
        let mut out = Vec::new();
        RosterWriter::new("PM10").write_to(&roster(), &mut out)?;

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "State Code,County Code,Site Number,POCW,POCPM10,Lat,Lon,State Name,County Name,,\n\
             6,37,1,1,5,34.066,-118.227,California,Los Angeles,1991,0\n"
        );
        Ok(())
    }

    #[test]
    fn test_whole_degree_coordinates_keep_decimal() {
        let entry = RosterEntry {
            row: InventoryRow::new(StationKey::new(4, 13, 19), 1, 3),
            meta: StationMeta::new(34.0, -112.0, "Arizona".into(), "Maricopa".into()),
            markers: vec![0],
        };
        let record = RosterWriter::record(&entry);
        assert_eq!(record[5], "34.0");
        assert_eq!(record[6], "-112.0");
    }

    #[test]
    fn test_labeled_year_columns() {
        let header = RosterWriter::new("OZONE").with_year_labels(true).header(&[2001, 2002]);
        assert_eq!(header[4], "POCOZONE");
        assert_eq!(&header[9..], &["2001".to_string(), "2002".to_string()]);
    }

    #[test]
    fn test_write_file() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("roster.csv");
        RosterWriter::new("PM10").write(&roster(), &path)?;

        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_path(&path)?;
        let rows: Vec<csv::StringRecord> = reader.records().collect::<std::result::Result<_, _>>()?;
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][9], "1991");
        assert_eq!(&rows[0][10], "0");
        Ok(())
    }
}
