use std::path::{Path, PathBuf};

/// Path of a per-year extract: `{dir}/{prefix}_{year}.{extension}`
pub fn year_file_path(dir: &Path, prefix: &str, year: i32, extension: &str) -> PathBuf {
    dir.join(format!("{}_{}.{}", prefix, year, extension))
}

/// Header of the variable channel column, e.g. `POCPM10`
pub fn variable_channel_column(prefix: &str) -> String {
    format!("POC{}", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_file_path() {
        let path = year_file_path(Path::new("EPA_FILES"), "WIND", 1991, "csv");
        assert_eq!(path, PathBuf::from("EPA_FILES").join("WIND_1991.csv"));

        let path = year_file_path(Path::new("/data/epa/"), "PM10", 2003, "txt");
        assert_eq!(path.to_string_lossy(), "/data/epa/PM10_2003.txt");
    }

    #[test]
    fn test_variable_channel_column() {
        assert_eq!(variable_channel_column("PM10"), "POCPM10");
        assert_eq!(variable_channel_column("OZONE"), "POCOZONE");
    }
}
