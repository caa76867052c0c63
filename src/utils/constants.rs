/// Parameter name marking a reference row as the wind sub-type used for matching
pub const DEFAULT_REFERENCE_PARAMETER: &str = "Wind Speed - Resultant";

/// Default per-year file extension
pub const DEFAULT_EXTENSION: &str = "csv";

/// Defaults mirroring the usual WIND / PM10 setup
pub const DEFAULT_YEAR_START: i32 = 1991;
pub const DEFAULT_YEAR_END: i32 = 1995;
pub const DEFAULT_FILES_DIR: &str = "EPA_FILES/";
pub const DEFAULT_PREFIX_REFERENCE: &str = "WIND";
pub const DEFAULT_PREFIX_VARIABLE: &str = "PM10";
pub const DEFAULT_OUTPUT_FILE: &str = "Analyze_EPA_Files.csv";

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "EPA_INVENTORY";

/// Input column names
pub const COL_STATE_CODE: &str = "State Code";
pub const COL_COUNTY_CODE: &str = "County Code";
pub const COL_SITE_NUM: &str = "Site Num";
pub const COL_POC: &str = "POC";
pub const COL_PARAMETER_NAME: &str = "Parameter Name";
pub const COL_SAMPLE_MEASUREMENT: &str = "Sample Measurement";
pub const COL_DATE_GMT: &str = "Date GMT";
pub const COL_TIME_GMT: &str = "Time GMT";
pub const COL_STATE_NAME: &str = "State Name";
pub const COL_COUNTY_NAME: &str = "County Name";
pub const COL_LATITUDE: &str = "Latitude";
pub const COL_LONGITUDE: &str = "Longitude";

pub const REFERENCE_COLUMNS: &[&str] = &[
    COL_STATE_CODE,
    COL_COUNTY_CODE,
    COL_SITE_NUM,
    COL_POC,
    COL_PARAMETER_NAME,
    COL_SAMPLE_MEASUREMENT,
    COL_DATE_GMT,
    COL_TIME_GMT,
];

pub const VARIABLE_COLUMNS: &[&str] = &[
    COL_STATE_CODE,
    COL_COUNTY_CODE,
    COL_SITE_NUM,
    COL_POC,
    COL_SAMPLE_MEASUREMENT,
    COL_DATE_GMT,
    COL_TIME_GMT,
    COL_STATE_NAME,
    COL_COUNTY_NAME,
    COL_LATITUDE,
    COL_LONGITUDE,
];

/// Timestamp formats of the GMT columns
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Fixed leading columns of the output roster
pub const ROSTER_STATION_COLUMNS: &[&str] = &["State Code", "County Code", "Site Number"];
pub const ROSTER_REFERENCE_CHANNEL_COLUMN: &str = "POCW";
pub const ROSTER_META_COLUMNS: &[&str] = &["Lat", "Lon", "State Name", "County Name"];
