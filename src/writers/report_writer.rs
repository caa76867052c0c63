use std::path::Path;

use crate::error::Result;
use crate::processors::CoverageReport;
use crate::writers::atomic::write_atomic;

/// Write the coverage report as pretty-printed JSON.
pub fn write_report_json(report: &CoverageReport, path: &Path) -> Result<()> {
    write_atomic(path, |w| {
        serde_json::to_writer_pretty(&mut *w, report)?;
        w.write_all(b"\n")?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::YearStats;
    use tempfile::TempDir;

    #[test]
    fn test_report_round_trips_through_json() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("report.json");

        let mut report = CoverageReport::new("WIND", "PM10");
        report.push_year(YearStats {
            year: 1991,
            matched_stations: 4,
            inventory_rows: 6,
            ..Default::default()
        });
        write_report_json(&report, &path)?;

        let parsed: CoverageReport = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
        assert_eq!(parsed, report);
        Ok(())
    }
}
